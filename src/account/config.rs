use typed_builder::TypedBuilder;

/// Amount moved from savings to current when no other amount is configured.
pub const TRANSFER_AMOUNT: f64 = 300.0;

#[derive(TypedBuilder, Debug, Clone, Copy, PartialEq)]
pub struct TransferPolicy {
    /// The fixed amount moved by every transfer.
    #[builder(default = TRANSFER_AMOUNT)]
    pub(crate) amount: f64,
}

impl TransferPolicy {
    pub const fn amount(&self) -> f64 {
        self.amount
    }
}

impl Default for TransferPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}
