pub use crate::{
    ext::{ExtendF32, ExtendVector3},
    orientation::ExtendOrientation,
};
