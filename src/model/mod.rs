//! Typed CloudFormation template graph: the template, its resources, and the
//! policy documents and references they carry.

pub mod policy;
pub mod reference;
pub mod resource;
pub mod template;

pub use policy::*;
pub use reference::*;
pub use resource::*;
pub use template::*;
