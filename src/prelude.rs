pub use crate::ext::RequestExt;
