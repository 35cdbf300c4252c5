//! Integer pixel geometry shared by lists and containers.

/// Measured size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle; `right`/`bottom` are exclusive edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns a copy moved vertically by `dy`.
    pub fn translate_y(self, dy: i32) -> Self {
        Self {
            top: self.top + dy,
            bottom: self.bottom + dy,
            ..self
        }
    }

    /// Returns a copy grown by `insets` on every side.
    pub fn outset(self, insets: EdgeInsets) -> Self {
        Self {
            left: self.left - insets.left,
            top: self.top - insets.top,
            right: self.right + insets.right,
            bottom: self.bottom + insets.bottom,
        }
    }
}

/// Padding or margins around a box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every side.
    pub fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Only top and bottom insets.
    pub fn vertical_only(top: i32, bottom: i32) -> Self {
        Self::new(0, top, 0, bottom)
    }

    #[inline]
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }
}
