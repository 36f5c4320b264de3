//! Dpath resolution.
//!
//! A walk starts at the root record (slot zero) and, for every step, looks the
//! step's name up in the zone named by the previous record's data word. The
//! rune of each step gates the walk:
//!
//! - `:` needs the walk to still be locked *and* the fetched entry to carry
//!   the Lock flag;
//! - `.` accepts any entry.
//!
//! After each step the walk's lock state becomes that step's own rune, so an
//! open step re-opens the walk even when it passed through a locked entry.
//!
//! Plain and traced resolution share [`Walker::resolve`]; they only differ in
//! whether visited records are kept.

use dmap_crypto::slot_of;
use dmap_path::{parse, Path, Step};
use dmap_store::StorageProvider;
use dmap_types::{Address, Record, Slot, Zone};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::fetch::{encode_step_name, fetch_record};

/// Mutable state threaded through one walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkContext {
    /// Zone the next step is looked up in.
    pub zone: Zone,
    /// Whether a `:` step is currently allowed.
    pub locked: bool,
}

impl WalkContext {
    /// Context after reading the root record.
    pub fn start(root: &Record, path: &Path) -> Self {
        Self {
            zone: root.zone(),
            locked: path.first_rune_locked(),
        }
    }

    /// Validate the record fetched for `step` and move past it.
    pub fn advance(&mut self, index: usize, step: &Step, record: &Record) -> RegistryResult<()> {
        if step.locked {
            if !self.locked {
                return Err(RegistryError::UnlockedSubpath {
                    index,
                    step: step.clone(),
                });
            }
            if !record.is_locked() {
                return Err(RegistryError::NotLocked {
                    index,
                    step: step.clone(),
                });
            }
        }
        self.locked = step.locked;
        self.zone = record.zone();
        Ok(())
    }
}

/// Outcome of a walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The last record visited; the root record for an empty path.
    pub record: Record,
    /// Every record visited, root first. Empty unless tracing was requested.
    pub trace: Vec<Record>,
}

/// Resolves dpaths against one registry contract.
pub struct Walker<'a, P: ?Sized> {
    provider: &'a P,
    address: Address,
}

impl<'a, P> Walker<'a, P>
where
    P: StorageProvider + ?Sized,
{
    pub fn new(provider: &'a P, address: Address) -> Self {
        Self { provider, address }
    }

    /// The registry contract this walker reads from.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Parse and resolve `path`.
    pub async fn resolve(&self, path: &str, collect_trace: bool) -> RegistryResult<Resolution> {
        let path = parse(path)?;
        self.resolve_path(&path, collect_trace).await
    }

    /// Resolve an already parsed path.
    pub async fn resolve_path(&self, path: &Path, collect_trace: bool) -> RegistryResult<Resolution> {
        let root = fetch_record(self.provider, &self.address, &Slot::ROOT).await?;
        let mut ctx = WalkContext::start(&root, path);
        let mut trace = Vec::new();
        if collect_trace {
            trace.reserve_exact(path.len() + 1);
            trace.push(root);
        }

        let mut record = root;
        for (index, step) in path.iter().enumerate() {
            if ctx.zone.is_zero() {
                return Err(RegistryError::ZeroRegister {
                    index,
                    step: step.clone(),
                });
            }
            let name = encode_step_name(&step.name)?;
            let slot = slot_of(&ctx.zone, &name);
            debug!(index, %step, zone = %ctx.zone, %slot, locked = ctx.locked, "walking step");

            record = fetch_record(self.provider, &self.address, &slot).await?;
            ctx.advance(index, step, &record)?;
            if collect_trace {
                trace.push(record);
            }
        }

        debug!(%path, steps = path.len(), "resolved dpath");
        Ok(Resolution { record, trace })
    }
}

/// Resolve `path` to its final record.
pub async fn walk<P>(provider: &P, address: &Address, path: &str) -> RegistryResult<Record>
where
    P: StorageProvider + ?Sized,
{
    let resolution = Walker::new(provider, *address).resolve(path, false).await?;
    Ok(resolution.record)
}

/// Resolve `path` and return every record visited, root first.
///
/// On success the trace holds one record per step plus the root.
pub async fn walk_traced<P>(provider: &P, address: &Address, path: &str) -> RegistryResult<Vec<Record>>
where
    P: StorageProvider + ?Sized,
{
    let resolution = Walker::new(provider, *address).resolve(path, true).await?;
    Ok(resolution.trace)
}
