//! # Tessera session
//!
//! The stateful half of Tessera: an in-memory [`Session`] that owns the
//! active [`Chain`], the current recovery phrase and an ordered
//! [`Registry`] of derived [`WalletRecord`]s.
//!
//! ```
//! use tessera_session::{Chain, Session};
//!
//! let phrase = "abandon abandon abandon abandon abandon abandon \
//!               abandon abandon abandon abandon abandon about";
//!
//! let mut session = Session::default();
//! session.select_chain(Chain::Ethereum)?;
//! let record = session.generate_wallet(Some(phrase))?;
//! assert_eq!(record.public_key(), "0x2759A6Ad812b8A7B73A63a243816D66F5b72A0A7");
//!
//! // Private keys stay masked until revealed.
//! assert_eq!(session.display_private_key(0)?, "*".repeat(64));
//! # Ok::<(), tessera::Error>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_panics_doc, clippy::missing_fields_in_debug)]

mod chain;
mod record;
mod registry;
mod session;
mod shared;

pub use chain::{Chain, ParseChainError};
pub use record::WalletRecord;
pub use registry::{Entry, Registry};
pub use session::{MASK_CHAR, MaskPolicy, Session, SessionOptions};
pub use shared::SharedSession;
