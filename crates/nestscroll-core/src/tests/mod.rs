mod pre_draw_tests;
mod runtime_tests;
