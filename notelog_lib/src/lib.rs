//! In-process accumulator for categorized notes gathered during a unit of
//! work, rendered as one text block at the end.
//!
//! ```
//! use notelog_lib::{Category, MessageLog, Newline};
//!
//! let mut log = MessageLog::with_newline("APP", Newline::Lf);
//! log.add_info(["started"]);
//! log.add_error(["disk full"]);
//! assert!(log.has_errors());
//! assert_eq!(log.prevailing(), Category::Plain);
//! assert_eq!(log.render(), "INF[APP]: started\nERR[APP]: disk full\n");
//! ```

pub mod error;
pub mod log;
pub mod logging;
pub mod message;

pub use error::NotelogError;
pub use log::{MessageLog, Newline};
pub use logging::setup_logging;
pub use message::{Category, Message, DELIM_MSG_TYPE};
