//! Buy-now flow: availability decides between the hosted checkout and the
//! out-of-stock dialog.

use crate::config::StoreConfig;

use super::checkout::LinkOpener;

/// Visibility of the out-of-stock dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Shown,
}

/// What a click on "buy now" did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyOutcome {
    /// The checkout link was handed to the opener.
    Checkout,
    /// Nothing to sell; the dialog is now shown.
    OutOfStock,
}

/// State owned by the product section for the lifetime of its mount.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseFlow {
    in_stock: bool,
    checkout_url: String,
    dialog: DialogState,
}

impl PurchaseFlow {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            in_stock: config.in_stock,
            checkout_url: config.checkout_url.clone(),
            dialog: DialogState::Hidden,
        }
    }

    pub fn buy_now(&mut self, opener: &dyn LinkOpener) -> BuyOutcome {
        if self.in_stock {
            match opener.open_external(&self.checkout_url) {
                Ok(()) => tracing::info!(url = %self.checkout_url, "checkout requested"),
                Err(err) => {
                    tracing::warn!(%err, url = %self.checkout_url, "checkout link did not open")
                }
            }
            BuyOutcome::Checkout
        } else {
            self.dialog = DialogState::Shown;
            tracing::info!("buy attempted while out of stock");
            BuyOutcome::OutOfStock
        }
    }

    /// Dialog-requested visibility change (`on_open_change`).
    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog = if open {
            DialogState::Shown
        } else {
            DialogState::Hidden
        };
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog == DialogState::Shown
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}
