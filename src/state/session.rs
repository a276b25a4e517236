use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};
use uuid::Uuid;

use crate::advice::{AdviceService, request_advice};
use crate::error::{MealError, Result};
use crate::lookup::FoodLookup;
use crate::meal::{self, GramWeight, MealLedger, WarningSet};
use crate::models::{EntryId, MealEntry, Totals};

/// Identifies one user session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct Added {
    pub name: String,

    /// Missing-nutrient advisory, if any.
    pub notice: Option<String>,
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone)]
pub struct MealView {
    pub entries: Vec<MealEntry>,
    pub totals: Totals,
    pub warnings: WarningSet,
    pub notice: Option<String>,
    pub advice: Option<String>,
}

/// Per-session meal state, handed to every handler.
#[derive(Debug, Default)]
pub struct Session {
    ledger: MealLedger,

    /// Shown once on the next render.
    notice: Option<String>,

    /// Shown once on the next render.
    advice: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &MealLedger {
        &self.ledger
    }

    /// Look up `food_id`, scale it to `grams_raw` and log it.
    ///
    /// Bad gram input falls back to the default weight. Nothing is appended
    /// when the details lookup fails or the energy unit is unsupported.
    pub fn add_food(
        &mut self,
        lookup: &dyn FoodLookup,
        food_id: &str,
        grams_raw: &str,
        food_name: &str,
    ) -> Result<Added> {
        let weight = GramWeight::parse_or_default(grams_raw);
        let record = lookup
            .details(food_id)
            .ok_or_else(|| MealError::FoodUnavailable(food_id.to_string()))?;

        let scaled = meal::scale(&record, food_name, weight)?;
        let notice = scaled.missing_notice();
        let name = scaled.entry.name.clone();
        let id = self.ledger.append(scaled.entry);

        info!(entry = %name, %id, fdc_id = food_id, "Added food to meal");
        self.notice = notice.clone();
        Ok(Added { name, notice })
    }

    /// Remove by position as seen in the last render.
    pub fn remove_at(&mut self, index: usize) -> Result<MealEntry> {
        self.ledger.remove_at(index)
    }

    /// Remove by stable id.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<MealEntry> {
        self.ledger.remove(id)
    }

    /// Request advice for the current meal and keep it for the next render.
    pub fn complete(&mut self, advisor: Option<&dyn AdviceService>) -> Result<String> {
        let advice = request_advice(self.ledger.entries(), advisor)?;
        self.advice = Some(advice.clone());
        Ok(advice)
    }

    pub fn reset(&mut self) {
        debug!("Resetting session");
        self.ledger.clear();
        self.notice = None;
        self.advice = None;
    }

    pub fn totals(&self) -> Totals {
        meal::totals(self.ledger.entries())
    }

    pub fn warnings(&self) -> WarningSet {
        meal::evaluate(&self.totals())
    }

    /// Build a render model, consuming the one-shot notice and advice.
    pub fn view(&mut self) -> MealView {
        let entries = self.ledger.snapshot();
        let totals = meal::totals(&entries);
        let warnings = meal::evaluate(&totals);
        MealView {
            entries,
            totals,
            warnings,
            notice: self.notice.take(),
            advice: self.advice.take(),
        }
    }
}

/// Maps session ids to independent sessions.
///
/// Each session sits behind its own lock; a handler holds it for its whole
/// run, so readers never see a half-applied mutation.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, Arc<Mutex<Session>>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh, empty session.
    pub fn create(&self) -> SessionId {
        let id = SessionId::new();
        lock(&self.sessions).insert(id, Arc::new(Mutex::new(Session::new())));
        debug!(session = %id, "Created session");
        id
    }

    fn handle(&self, id: SessionId) -> Arc<Mutex<Session>> {
        lock(&self.sessions)
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(Session::new())))
            .clone()
    }

    /// Run `f` against the session, creating it if unknown.
    pub fn with_session<R>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> R) -> R {
        let session = self.handle(id);
        let mut guard = lock(&session);
        f(&mut guard)
    }

    /// Drop a session and its meal.
    pub fn expire(&self, id: SessionId) -> bool {
        lock(&self.sessions).remove(&id).is_some()
    }

    pub fn contains(&self, id: SessionId) -> bool {
        lock(&self.sessions).contains_key(&id)
    }

    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.sessions).is_empty()
    }
}
