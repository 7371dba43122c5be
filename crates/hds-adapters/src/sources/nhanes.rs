//! NHANES placeholder.
//!
//! NHANES ships demographics, examination and laboratory tables as separate
//! files joined on respondent id, with glucose in mmol/L in some cycles. Until
//! that join is wired up both operations fail with `Unimplemented`.

use polars::prelude::DataFrame;

use crate::adapter::{Adapter, SourceDescriptor};
use crate::error::{AdapterError, Result};

pub const KIND: &str = "nhanes";

pub struct NhanesAdapter {
    descriptor: SourceDescriptor,
}

impl NhanesAdapter {
    pub fn new(descriptor: SourceDescriptor) -> Self {
        Self { descriptor }
    }
}

impl Adapter for NhanesAdapter {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn load_raw(&self) -> Result<DataFrame> {
        Err(AdapterError::Unimplemented {
            component: KIND,
            operation: "load_raw",
        })
    }

    fn to_silver(&self, _raw: &DataFrame) -> Result<DataFrame> {
        Err(AdapterError::Unimplemented {
            component: KIND,
            operation: "to_silver",
        })
    }
}
