//! Range Asymmetric Numeral System (rANS) entropy coder.
//!
//! A stack-discipline coder with a single 32-bit state. Encoding pushes
//! symbols onto the state; decoding pops them in reverse, so the last
//! symbol encoded is the first symbol decoded. The MIDO encoder therefore
//! feeds literals in **reverse input order**, and the decoder recovers
//! them forward. That ordering is part of the format.
//!
//! Renormalization is byte-granular: the encoder sheds low bytes whenever
//! the pending state update would overflow 32 bits, and the decoder
//! refills from the buffer (read back to front) whenever the state drops
//! below [`RANS_L`].

use crate::model::SymbolStats;
use crate::{PROB_BITS, PROB_SCALE, RANS_L};

/// rANS encoder owning its output buffer and symbol model.
///
/// Construct one per compression; two encoders never share state.
#[derive(Debug)]
pub struct RansEncoder {
    /// Coder state, kept in `[RANS_L, 2^32)` between symbols.
    state: u32,
    /// Renormalization bytes in production order.
    buffer: Vec<u8>,
    /// Static model every symbol is coded against.
    stats: SymbolStats,
}

impl RansEncoder {
    /// Create an encoder over a prepared model.
    pub fn new(stats: SymbolStats) -> Self {
        Self {
            state: RANS_L,
            buffer: Vec::new(),
            stats,
        }
    }

    /// Push one symbol onto the state.
    ///
    /// The symbol must have nonzero frequency in the model, which holds
    /// for every symbol present in the histogram the model was built from.
    pub fn encode(&mut self, symbol: u8) {
        let freq = self.stats.freq(symbol) as u32;
        let cum = self.stats.cum(symbol) as u32;
        debug_assert!(freq >= 1, "symbol {symbol} absent from model");

        // Shed low bytes while the upcoming update could overflow: the
        // bound freq << (31 - PROB_BITS) keeps the updated state < 2^32.
        let x_max = freq << (31 - PROB_BITS);
        while self.state >= x_max {
            self.buffer.push(self.state as u8);
            self.state >>= 8;
        }

        self.state = (self.state / freq) * PROB_SCALE + (self.state % freq) + cum;
    }

    /// Finish encoding: append the final state as four little-endian
    /// bytes and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        self.buffer.extend_from_slice(&self.state.to_le_bytes());
        self.buffer
    }

    /// Borrow the model the encoder codes against.
    pub fn stats(&self) -> &SymbolStats {
        &self.stats
    }

    #[cfg(test)]
    fn state(&self) -> u32 {
        self.state
    }
}

/// rANS decoder reading a finished encoder buffer back to front.
///
/// The last four buffer bytes are the initial state; the read pointer
/// starts just below them and walks toward the buffer start as
/// renormalization consumes bytes.
#[derive(Debug)]
pub struct RansDecoder<'a> {
    /// Coder state.
    state: u32,
    /// The encoded byte region.
    data: &'a [u8],
    /// Next renormalization byte is `data[ptr - 1]`.
    ptr: usize,
    /// Static model, deserialized from the frame.
    stats: SymbolStats,
}

impl<'a> RansDecoder<'a> {
    /// Create a decoder over an encoded region and its model.
    ///
    /// Regions shorter than four bytes leave the state at [`RANS_L`]; the
    /// only well-formed case for that is a stream with no literals at all,
    /// where the decoder is never asked for a symbol.
    pub fn new(data: &'a [u8], stats: SymbolStats) -> Self {
        let mut ptr = data.len();
        let mut state = RANS_L;
        if ptr >= 4 {
            ptr -= 4;
            state = u32::from_le_bytes([data[ptr], data[ptr + 1], data[ptr + 2], data[ptr + 3]]);
        }
        Self {
            state,
            data,
            ptr,
            stats,
        }
    }

    /// Pop one symbol off the state.
    pub fn decode(&mut self) -> u8 {
        let slot = (self.state & (PROB_SCALE - 1)) as u16;
        let symbol = self.stats.symbol_for_slot(slot);
        let freq = self.stats.freq(symbol) as u32;
        let cum = self.stats.cum(symbol) as u32;

        self.state = (self.state >> PROB_BITS) * freq + slot as u32 - cum;

        while self.state < RANS_L && self.ptr > 0 {
            self.ptr -= 1;
            self.state = (self.state << 8) | self.data[self.ptr] as u32;
        }

        symbol
    }

    #[cfg(test)]
    fn state(&self) -> u32 {
        self.state
    }

    #[cfg(test)]
    fn ptr(&self) -> usize {
        self.ptr
    }
}
