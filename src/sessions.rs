#![cfg(feature = "std")]

//! Per-match session bookkeeping.
//!
//! Matches are fully independent; each entry sits behind its own mutex so
//! `create`/`resolve_hit` on one match never blocks another. The request
//! layer supplies the authenticated caller as `owner`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context};
use log::info;
use rand::Rng;

use crate::common::{Coord, HitReport};
use crate::game::Match;
use crate::wire::ShipView;

pub type MatchId = u64;
pub type UserId = u64;

struct Session {
    owner: UserId,
    game: Match,
}

/// Registry of in-flight matches keyed by match id.
pub struct MatchStore {
    next_id: Mutex<MatchId>,
    matches: Mutex<HashMap<MatchId, Arc<Mutex<Session>>>>,
}

impl MatchStore {
    pub fn new() -> Self {
        MatchStore {
            next_id: Mutex::new(1),
            matches: Mutex::new(HashMap::new()),
        }
    }

    /// Start a match for `owner`: place the fleet and return the match id
    /// together with the placed ships in wire shape.
    pub fn create<R: Rng>(
        &self,
        owner: UserId,
        rng: &mut R,
        fleet: &[usize],
    ) -> anyhow::Result<(MatchId, Vec<ShipView>)> {
        let game = Match::new(rng, fleet).map_err(|e| anyhow!(e))?;
        let ships = game.board().ships().iter().map(ShipView::from).collect();

        let id = {
            let mut next = self
                .next_id
                .lock()
                .map_err(|_| anyhow!("match id lock poisoned"))?;
            let id = *next;
            *next += 1;
            id
        };
        self.matches
            .lock()
            .map_err(|_| anyhow!("match table lock poisoned"))?
            .insert(id, Arc::new(Mutex::new(Session { owner, game })));
        info!("match {} created for user {}", id, owner);
        Ok((id, ships))
    }

    /// Resolve a shot against the given match.
    pub fn resolve_hit(&self, id: MatchId, coord: Coord) -> anyhow::Result<HitReport> {
        let session = self.session(id)?;
        let mut session = session
            .lock()
            .map_err(|_| anyhow!("match {} lock poisoned", id))?;
        session.game.resolve_hit(coord).map_err(|e| anyhow!(e))
    }

    /// Owner of the given match, for score attribution.
    pub fn owner(&self, id: MatchId) -> anyhow::Result<UserId> {
        let session = self.session(id)?;
        let session = session
            .lock()
            .map_err(|_| anyhow!("match {} lock poisoned", id))?;
        Ok(session.owner)
    }

    /// Drop a finished (or abandoned) match from the store.
    pub fn remove(&self, id: MatchId) -> anyhow::Result<()> {
        self.matches
            .lock()
            .map_err(|_| anyhow!("match table lock poisoned"))?
            .remove(&id)
            .map(|_| info!("match {} removed", id))
            .with_context(|| format!("unknown match {}", id))
    }

    pub fn len(&self) -> usize {
        self.matches.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn session(&self, id: MatchId) -> anyhow::Result<Arc<Mutex<Session>>> {
        self.matches
            .lock()
            .map_err(|_| anyhow!("match table lock poisoned"))?
            .get(&id)
            .cloned()
            .with_context(|| format!("unknown match {}", id))
    }
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new()
    }
}
