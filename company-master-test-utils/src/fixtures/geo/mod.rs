use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn geo<'a>(&'a self) -> GeoFixtures<'a> {
        GeoFixtures { setup: self }
    }
}

pub struct GeoFixtures<'a> {
    pub setup: &'a TestContext,
}
