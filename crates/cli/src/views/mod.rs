//! Per-screen state containers.
//!
//! Every fetch follows the same transition: begin_load sets the loading
//! flag; finish_load replaces the held list wholesale with the server
//! result, or with a hardcoded fallback when the fetch failed. Failures
//! are logged and otherwise invisible; the screen is always populated.
//!
//! Mutations are optimistic: the server response is preferred, but on
//! failure the locally-constructed record is applied instead, tagged
//! `server_confirmed: false` so confirmed and unconfirmed records never
//! blend silently. There is no reconciliation pass and no retry; an
//! unconfirmed record lasts until the next full reload, which reverts
//! to server truth.

pub mod calendar;
pub mod chat;
pub mod cohorts;
pub mod leads;
pub mod profile;

/// Where the currently-held data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Server,
    Fallback,
}

/// A held record plus whether the server acknowledged it.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    pub record: T,
    pub server_confirmed: bool,
}

impl<T> Tracked<T> {
    fn confirmed(record: T) -> Self {
        Self {
            record,
            server_confirmed: true,
        }
    }

    fn unconfirmed(record: T) -> Self {
        Self {
            record,
            server_confirmed: false,
        }
    }
}

/// List-shaped view state: the fetched list, a loading flag, and the
/// origin of the data.
#[derive(Debug)]
pub struct ListState<T> {
    items: Vec<Tracked<T>>,
    pub loading: bool,
    pub origin: DataOrigin,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            origin: DataOrigin::Fallback,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// End a fetch. Success replaces the list with exactly the server
    /// data; failure logs and substitutes the fallback. The loading flag
    /// ends false either way.
    pub fn finish_load(&mut self, result: api::Result<Vec<T>>, fallback: Vec<T>) {
        match result {
            Ok(records) => {
                self.items = records.into_iter().map(Tracked::confirmed).collect();
                self.origin = DataOrigin::Server;
            }
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed, using fallback data");
                self.items = fallback.into_iter().map(Tracked::unconfirmed).collect();
                self.origin = DataOrigin::Fallback;
            }
        }
        self.loading = false;
    }

    /// Optimistic create: append the server's record, or the local one
    /// when the call failed. The new item always appears.
    pub fn apply_create(&mut self, result: api::Result<T>, local: T) {
        match result {
            Ok(record) => self.items.push(Tracked::confirmed(record)),
            Err(err) => {
                tracing::warn!(error = %err, "create failed, keeping local record");
                self.items.push(Tracked::unconfirmed(local));
            }
        }
    }

    /// Optimistic whole-list replace (stat tiles): the server's returned
    /// list wins; on failure the proposed list is shown as-is.
    pub fn apply_replace(&mut self, result: api::Result<Vec<T>>, proposed: Vec<T>) {
        match result {
            Ok(records) => {
                self.items = records.into_iter().map(Tracked::confirmed).collect();
            }
            Err(err) => {
                tracing::warn!(error = %err, "update failed, keeping proposed list");
                self.items = proposed.into_iter().map(Tracked::unconfirmed).collect();
            }
        }
    }

    /// Optimistic in-place patch of the record matched by `matches`.
    pub fn apply_update(
        &mut self,
        result: api::Result<T>,
        local: T,
        matches: impl Fn(&T) -> bool,
    ) {
        let replacement = match result {
            Ok(record) => Tracked::confirmed(record),
            Err(err) => {
                tracing::warn!(error = %err, "update failed, keeping local record");
                Tracked::unconfirmed(local)
            }
        };
        if let Some(slot) = self.items.iter_mut().find(|t| matches(&t.record)) {
            *slot = replacement;
        } else {
            self.items.push(replacement);
        }
    }

    /// Optimistic delete: the record disappears locally whatever the
    /// server said.
    pub fn apply_remove(&mut self, result: api::Result<()>, matches: impl Fn(&T) -> bool) {
        if let Err(err) = result {
            tracing::warn!(error = %err, "delete failed, removing locally anyway");
        }
        self.items.retain(|t| !matches(&t.record));
    }

    pub fn items(&self) -> &[Tracked<T>] {
        &self.items
    }

    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|t| &t.record)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records the server has not acknowledged; a future sync pass could
    /// retry exactly these.
    pub fn unconfirmed_count(&self) -> usize {
        self.items.iter().filter(|t| !t.server_confirmed).count()
    }
}

/// Single-record analogue of `ListState`, used by the profile screen.
#[derive(Debug, Default)]
pub struct RecordState<T> {
    value: Option<Tracked<T>>,
    pub loading: bool,
}

impl<T> RecordState<T> {
    pub fn new() -> Self {
        Self {
            value: None,
            loading: false,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: api::Result<T>, fallback: T) {
        match result {
            Ok(record) => self.value = Some(Tracked::confirmed(record)),
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed, using fallback record");
                self.value = Some(Tracked::unconfirmed(fallback));
            }
        }
        self.loading = false;
    }

    pub fn apply_update(&mut self, result: api::Result<T>, local: T) {
        match result {
            Ok(record) => self.value = Some(Tracked::confirmed(record)),
            Err(err) => {
                tracing::warn!(error = %err, "update failed, keeping local record");
                self.value = Some(Tracked::unconfirmed(local));
            }
        }
    }

    pub fn get(&self) -> Option<&Tracked<T>> {
        self.value.as_ref()
    }

    pub fn record(&self) -> Option<&T> {
        self.value.as_ref().map(|t| &t.record)
    }
}

/// Client-generated id for optimistic records, following the frontend's
/// `Date.now()` convention.
pub fn local_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
