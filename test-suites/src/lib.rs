pub mod setup;
pub mod test_fixture;
