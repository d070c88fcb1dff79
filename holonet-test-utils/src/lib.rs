pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::factory;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestContext, TestError};
}
