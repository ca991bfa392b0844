use crate::{ops::*, *};

mod adjacency;

pub use adjacency::*;
