//! Behavioural coverage for slider categorisation.

use std::cell::Cell;

use citymatch_core::{Categorizer, Level};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn slider() -> Cell<i64> {
    Cell::new(5)
}

#[fixture]
fn level() -> Cell<Option<Level>> {
    Cell::new(None)
}

#[given("an infrastructure slider of {value}")]
fn given_slider(value: i64, #[from(slider)] slider: &Cell<i64>) {
    slider.set(value);
}

#[when("I categorise the slider")]
fn when_categorise(#[from(slider)] slider: &Cell<i64>, #[from(level)] level: &Cell<Option<Level>>) {
    level.set(Some(Categorizer::INFRASTRUCTURE.categorize(slider.get())));
}

#[then("the level is {code}")]
fn then_level(code: u8, #[from(level)] level: &Cell<Option<Level>>) {
    assert_eq!(level.get().map(Level::code), Some(code));
}

#[scenario(path = "tests/features/categorize.feature", index = 0)]
fn low_band_upper_edge(slider: Cell<i64>, level: Cell<Option<Level>>) {
    let _ = (slider, level);
}

#[scenario(path = "tests/features/categorize.feature", index = 1)]
fn medium_band_lower_edge(slider: Cell<i64>, level: Cell<Option<Level>>) {
    let _ = (slider, level);
}

#[scenario(path = "tests/features/categorize.feature", index = 2)]
fn medium_band_upper_edge(slider: Cell<i64>, level: Cell<Option<Level>>) {
    let _ = (slider, level);
}

#[scenario(path = "tests/features/categorize.feature", index = 3)]
fn high_band_lower_edge(slider: Cell<i64>, level: Cell<Option<Level>>) {
    let _ = (slider, level);
}

#[scenario(path = "tests/features/categorize.feature", index = 4)]
fn out_of_scale_values_clamp(slider: Cell<i64>, level: Cell<Option<Level>>) {
    let _ = (slider, level);
}
