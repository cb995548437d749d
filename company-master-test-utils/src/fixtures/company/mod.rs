use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn company<'a>(&'a self) -> CompanyFixtures<'a> {
        CompanyFixtures { setup: self }
    }
}

pub struct CompanyFixtures<'a> {
    pub setup: &'a TestContext,
}
