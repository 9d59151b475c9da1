//! Command registration for the host benchmarking harness.
//!
//! The harness looks operations up by command name, lists them with their
//! descriptions, and builds one instance per worker.

use perf_core::{RowOpConfig, StoreClient};
use perf_ops::{
    BatchWriteOp, FloatWriteOp, RowOpError, RowOperation, VerificationReadOp,
    VerificationWriteOp,
};
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while resolving or building an operation.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No operation is registered under this name.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The operation rejected its configuration.
    #[error(transparent)]
    Operation(#[from] RowOpError),
}

/// The row operations this crate registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    FloatWrite,
    BatchWrite,
    VerificationRead,
    VerificationWrite,
}

/// Name and description the harness lists an operation under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub kind: OperationKind,
    pub name: &'static str,
    pub description: &'static str,
}

/// All registered commands, in registration order.
pub const COMMANDS: [CommandDescriptor; 4] = [
    CommandDescriptor {
        kind: OperationKind::FloatWrite,
        name: "floatWrite",
        description: "Run float write test",
    },
    CommandDescriptor {
        kind: OperationKind::BatchWrite,
        name: "batchWrite",
        description: "Run batch write test",
    },
    CommandDescriptor {
        kind: OperationKind::VerificationRead,
        name: "verificationRead",
        description: "Run verificationRead read test",
    },
    CommandDescriptor {
        kind: OperationKind::VerificationWrite,
        name: "verificationWrite",
        description: "Run verificationWrite write test",
    },
];

impl OperationKind {
    fn descriptor(self) -> &'static CommandDescriptor {
        match self {
            OperationKind::FloatWrite => &COMMANDS[0],
            OperationKind::BatchWrite => &COMMANDS[1],
            OperationKind::VerificationRead => &COMMANDS[2],
            OperationKind::VerificationWrite => &COMMANDS[3],
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn description(self) -> &'static str {
        self.descriptor().description
    }

    /// Whether instances of this kind read rather than write.
    pub fn is_read(self) -> bool {
        matches!(self, OperationKind::VerificationRead)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COMMANDS
            .iter()
            .find(|command| command.name == s)
            .map(|command| command.kind)
            .ok_or_else(|| RegistryError::UnknownCommand(s.to_string()))
    }
}

/// Build one operation instance for a worker.
///
/// `rng` is owned by the new instance; the deterministic verification
/// operations drop it.
pub fn build_operation(
    kind: OperationKind,
    store: Arc<dyn StoreClient>,
    config: RowOpConfig,
    rng: StdRng,
) -> Result<Box<dyn RowOperation>, RegistryError> {
    let operation: Box<dyn RowOperation> = match kind {
        OperationKind::FloatWrite => Box::new(FloatWriteOp::new(store, config, rng)?),
        OperationKind::BatchWrite => Box::new(BatchWriteOp::new(store, config, rng)?),
        OperationKind::VerificationRead => Box::new(VerificationReadOp::new(store, config)?),
        OperationKind::VerificationWrite => Box::new(VerificationWriteOp::new(store, config)?),
    };
    Ok(operation)
}
