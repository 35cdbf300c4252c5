use crate::velocity::{FlingVelocitySource, VelocityProbe, VelocityReadError};

struct FixedSource(Result<f32, VelocityReadError>);

impl FlingVelocitySource for FixedSource {
    fn current_velocity(&self) -> Result<f32, VelocityReadError> {
        self.0.clone()
    }
}

#[test]
fn readable_velocity_passes_through() {
    let source = FixedSource(Ok(-1834.5));
    assert_eq!(VelocityProbe::new(Some(&source)).current_velocity_y(), -1834.5);
}

#[test]
fn missing_source_reads_as_rest() {
    assert_eq!(VelocityProbe::new(None).current_velocity_y(), 0.0);
}

#[test]
fn read_failures_degrade_to_zero() {
    let inactive = FixedSource(Err(VelocityReadError::Inactive));
    let unavailable = FixedSource(Err(VelocityReadError::Unavailable {
        reason: "animator detached".into(),
    }));
    let garbage = FixedSource(Ok(f32::NAN));

    assert_eq!(VelocityProbe::new(Some(&inactive)).current_velocity_y(), 0.0);
    assert_eq!(VelocityProbe::new(Some(&unavailable)).current_velocity_y(), 0.0);
    assert_eq!(VelocityProbe::new(Some(&garbage)).current_velocity_y(), 0.0);
}

#[test]
fn errors_render_reason() {
    let err = VelocityReadError::Unavailable {
        reason: "animator detached".into(),
    };
    assert_eq!(err.to_string(), "fling velocity unavailable: animator detached");
}
