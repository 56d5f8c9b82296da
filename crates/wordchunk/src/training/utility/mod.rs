//! # Trainer Implementation Utilities

mod pair_frequency_table;
#[doc(inline)]
pub use pair_frequency_table::{PairFrequencyTable, PairStats};

mod pair_span_index;
#[doc(inline)]
pub use pair_span_index::{PairIndexMap, PairSpanIndex};

mod symbol_span_buffer;
#[doc(inline)]
pub use symbol_span_buffer::SymbolSpanBuf;
