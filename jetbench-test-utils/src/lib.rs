pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::fleet, test_setup_with_fleet_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
