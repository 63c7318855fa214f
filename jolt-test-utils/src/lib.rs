pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{TEST_GUEST_ID, TEST_USER_ID},
        test_setup_with_tables, test_setup_with_tracking_tables, TestError, TestSetup,
    };
}
