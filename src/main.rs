// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use clap::ValueEnum;

use nandgates::gate;
use nandgates::gate::Gate2;
use nandgates::truth_table::print_truth_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GateName {
    Nand,
    And,
    Or,
    Xor,
    Eq,
}

impl GateName {
    /// All two-input gates in derivation order.
    const ALL: [GateName; 5] = [
        GateName::Nand,
        GateName::And,
        GateName::Or,
        GateName::Xor,
        GateName::Eq,
    ];

    fn display_name(self) -> &'static str {
        match self {
            GateName::Nand => "NAND",
            GateName::And => "AND",
            GateName::Or => "OR",
            GateName::Xor => "XOR",
            GateName::Eq => "EQ",
        }
    }

    fn gate(self) -> Gate2 {
        match self {
            GateName::Nand => gate::nand,
            GateName::And => gate::and,
            GateName::Or => gate::or,
            GateName::Xor => gate::xor,
            GateName::Eq => gate::eq,
        }
    }
}

/// Prints truth tables for two-input gates, all of which are derived from
/// the NAND primitive.
#[derive(Parser, Debug)]
struct Args {
    /// Gates to tabulate; when empty, all gates are printed in derivation
    /// order.
    #[arg(value_enum)]
    gates: Vec<GateName>,
}

fn main() {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let gates: Vec<GateName> = if args.gates.is_empty() {
        GateName::ALL.to_vec()
    } else {
        args.gates
    };

    for gate_name in gates {
        log::info!("printing truth table for {}", gate_name.display_name());
        print_truth_table(gate_name.display_name(), gate_name.gate());
    }
}
