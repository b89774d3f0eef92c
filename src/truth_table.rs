// SPDX-License-Identifier: Apache-2.0

//! Renders the full truth table for a two-input gate.
//!
//! Basic example usage:
//! ```
//! use nandgates::gate;
//! use nandgates::truth_table::write_truth_table;
//!
//! let mut out: Vec<u8> = Vec::new();
//! write_truth_table(&mut out, "NAND", gate::nand).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "NAND(0,0) ==> 1\nNAND(0,1) ==> 1\nNAND(1,0) ==> 1\nNAND(1,1) ==> 0\n"
//! );
//! ```

use std::io::Write;

use crate::bit::Bit;
use crate::gate::Gate2;

/// Writes the four truth-table rows for `gate`, in input order
/// (0,0), (0,1), (1,0), (1,1), one `name(x,y) ==> result` line each.
///
/// `name` is display-only; it has no effect on the computation.
pub fn write_truth_table(w: &mut impl Write, name: &str, gate: Gate2) -> std::io::Result<()> {
    for x in Bit::ALL {
        for y in Bit::ALL {
            writeln!(w, "{}({},{}) ==> {}", name, x, y, gate(x, y))?;
        }
    }
    Ok(())
}

/// Command line convenience: writes the table for `gate` to stdout.
pub fn print_truth_table(name: &str, gate: Gate2) {
    let stdout = std::io::stdout();
    write_truth_table(&mut stdout.lock(), name, gate)
        .unwrap_or_else(|err| panic!("Failed to write truth table for {}: {}", name, err));
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gate;

    use pretty_assertions::assert_eq;

    fn render(name: &str, g: Gate2) -> String {
        let mut out: Vec<u8> = Vec::new();
        write_truth_table(&mut out, name, g).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_nand_table() {
        assert_eq!(
            render("NAND", gate::nand),
            "NAND(0,0) ==> 1\n\
             NAND(0,1) ==> 1\n\
             NAND(1,0) ==> 1\n\
             NAND(1,1) ==> 0\n"
        );
    }

    #[test]
    fn test_xor_table() {
        assert_eq!(
            render("XOR", gate::xor),
            "XOR(0,0) ==> 0\n\
             XOR(0,1) ==> 1\n\
             XOR(1,0) ==> 1\n\
             XOR(1,1) ==> 0\n"
        );
    }

    #[test]
    fn test_name_is_display_only() {
        assert_eq!(
            render("whatever", gate::eq),
            "whatever(0,0) ==> 1\n\
             whatever(0,1) ==> 0\n\
             whatever(1,0) ==> 0\n\
             whatever(1,1) ==> 1\n"
        );
    }
}
