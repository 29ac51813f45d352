//! Progressive radius-expansion search controller.
//!
//! One controller drives one user-facing search box: a fresh query geocodes
//! the place name and attempts the smallest radius tier; when an attempt
//! finds fewer than [`TARGET_RESULT_COUNT`] POIs at a non-maximum tier, the
//! controller suspends with a "widen the search?" prompt and resumes at the
//! next tier on confirmation. The whole flow is an explicit resumable state
//! object, so every transition is observable through [`SearchSnapshot`]
//! without any user interface in the loop.

use vnpoi_core::{geo, Location, PointOfInterest};
use vnpoi_osm::OsmClient;

use crate::error::SearchError;

/// The fixed radius tiers of the expansion policy, in kilometers.
pub const RADIUS_TIERS_KM: [u32; 3] = [1, 5, 15];

/// An attempt with at least this many results is accepted as final.
const TARGET_RESULT_COUNT: usize = 5;

/// The tier after `radius_km`, or `None` at the maximum.
fn next_radius_km(radius_km: u32) -> Option<u32> {
    let position = RADIUS_TIERS_KM.iter().position(|&r| r == radius_km)?;
    RADIUS_TIERS_KM.get(position + 1).copied()
}

/// Human label for a category, used in prompt and summary messages.
fn category_label(category: &str) -> &'static str {
    match category {
        "cafe" => "cafes",
        "restaurant" => "restaurants",
        "tourism" => "tourist attractions",
        _ => "points of interest",
    }
}

/// One resolved location plus the category it was searched with. Reused by
/// every widen continuation until a fresh query replaces it.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub location: Location,
    pub category: String,
}

/// A pending "widen the search?" confirmation.
#[derive(Debug, Clone)]
pub struct PromptState {
    pub message: String,
    pub next_radius_km: u32,
}

/// Presentation-facing view of the controller state, re-readable after every
/// transition.
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    pub location: Option<Location>,
    pub results: Vec<PointOfInterest>,
    pub info_message: Option<String>,
    pub error_message: Option<String>,
    pub prompt_message: Option<String>,
    pub loading: bool,
}

/// How a cycle starts: a fresh query geocodes and begins at the smallest
/// tier; a widen continuation reuses the stored session location.
enum CycleStart<'a> {
    Fresh { query: &'a str, category: &'a str },
    Widen { radius_km: u32 },
}

/// Where one attempt left the session.
enum CycleOutcome {
    Accepted {
        results: Vec<PointOfInterest>,
    },
    Prompting {
        results: Vec<PointOfInterest>,
        message: String,
        next_radius_km: u32,
    },
    ExhaustedAtMax {
        results: Vec<PointOfInterest>,
        message: String,
    },
}

/// Classification of one finished attempt. Every variant is terminal for the
/// cycle: enough results, a widen prompt, or the maximum-radius summary.
enum AttemptDecision {
    Accept,
    Prompt { next_radius_km: u32, message: String },
    Exhausted { message: String },
}

fn classify_attempt(radius_km: u32, found: usize, category: &str) -> AttemptDecision {
    if found >= TARGET_RESULT_COUNT {
        return AttemptDecision::Accept;
    }
    let label = category_label(category);
    match next_radius_km(radius_km) {
        Some(next) => {
            let message = if found == 0 {
                format!(
                    "No named {label} found within {radius_km} km. \
                     Widen the search to {next} km?"
                )
            } else {
                format!(
                    "Only found {found} named {label} within {radius_km} km. \
                     Widen the search to {next} km?"
                )
            };
            AttemptDecision::Prompt {
                next_radius_km: next,
                message,
            }
        }
        None => {
            let message = if found == 0 {
                format!("No named {label} found within the maximum radius of {radius_km} km.")
            } else {
                format!(
                    "Found {found} named {label} within the maximum radius of {radius_km} km."
                )
            };
            AttemptDecision::Exhausted { message }
        }
    }
}

fn annotate_distance(mut poi: PointOfInterest, origin: &Location) -> PointOfInterest {
    let distance = geo::distance_km(
        origin.latitude,
        origin.longitude,
        poi.latitude,
        poi.longitude,
    );
    // A record whose distance cannot be computed is kept without one rather
    // than failing the attempt.
    poi.distance_km = distance.is_finite().then_some(distance);
    poi
}

/// Resumable search state machine over one [`OsmClient`].
///
/// `&mut self` on the driver methods makes "one cycle in flight at a time" a
/// compile-time property; there is no separate loading gate to race against.
pub struct SearchController {
    client: OsmClient,
    session: Option<SearchSession>,
    prompt: Option<PromptState>,
    results: Vec<PointOfInterest>,
    info_message: Option<String>,
    error_message: Option<String>,
    loading: bool,
}

impl SearchController {
    #[must_use]
    pub fn new(client: OsmClient) -> Self {
        Self {
            client,
            session: None,
            prompt: None,
            results: Vec::new(),
            info_message: None,
            error_message: None,
            loading: false,
        }
    }

    /// Starts a fresh search session for `query`.
    ///
    /// Blank input (after trimming) is a no-op. Otherwise all session state
    /// — location, results, messages, any pending prompt — is reset, the
    /// place name is geocoded, and one attempt runs at the smallest radius
    /// tier. Errors surface in the snapshot's `error_message`; they never
    /// leave partial results behind.
    pub async fn submit(&mut self, query: &str, category: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.session = None;
        self.begin_cycle();
        let outcome = self.run_cycle(CycleStart::Fresh { query, category }).await;
        self.finish_cycle(outcome);
    }

    /// Accepts a pending "widen the search?" prompt and resumes the session
    /// at the prompted radius, reusing the stored location (no re-geocode).
    ///
    /// A no-op when no prompt is pending. If the session location is gone —
    /// a confirmation firing after state was cleared — the cycle fails with
    /// the session-lost message.
    pub async fn confirm(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        self.begin_cycle();
        let outcome = self
            .run_cycle(CycleStart::Widen {
                radius_km: prompt.next_radius_km,
            })
            .await;
        self.finish_cycle(outcome);
    }

    /// Dismisses a pending prompt. Previously displayed results and messages
    /// stay as they are; declining twice in a row changes nothing.
    pub fn decline(&mut self) {
        self.prompt = None;
    }

    /// The current presentation-facing state.
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            location: self.session.as_ref().map(|s| s.location.clone()),
            results: self.results.clone(),
            info_message: self.info_message.clone(),
            error_message: self.error_message.clone(),
            prompt_message: self.prompt.as_ref().map(|p| p.message.clone()),
            loading: self.loading,
        }
    }

    /// Clears per-cycle display state and raises the loading flag. The
    /// session itself is only reset by a fresh query.
    fn begin_cycle(&mut self) {
        self.prompt = None;
        self.results.clear();
        self.info_message = None;
        self.error_message = None;
        self.loading = true;
    }

    fn finish_cycle(&mut self, outcome: Result<CycleOutcome, SearchError>) {
        match outcome {
            Ok(CycleOutcome::Accepted { results }) => {
                self.results = results;
            }
            Ok(CycleOutcome::Prompting {
                results,
                message,
                next_radius_km,
            }) => {
                // Partial results stay visible under the prompt.
                self.results = results;
                self.prompt = Some(PromptState {
                    message,
                    next_radius_km,
                });
            }
            Ok(CycleOutcome::ExhaustedAtMax { results, message }) => {
                self.results = results;
                self.info_message = Some(message);
            }
            Err(err) => {
                tracing::warn!(error = %err, "search cycle failed");
                self.error_message = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    /// Runs one search cycle: resolve (or reuse) the location, make one POI
    /// attempt at the starting radius, and classify it. Every classification
    /// is terminal — the cycle either accepts, prompts, or reports the
    /// maximum-radius summary — so a session spans multiple cycles only
    /// through user confirmations.
    async fn run_cycle(&mut self, start: CycleStart<'_>) -> Result<CycleOutcome, SearchError> {
        let (location, category, radius_km) = match start {
            CycleStart::Fresh { query, category } => {
                let location = self.client.geocode(query).await?;
                tracing::info!(
                    query,
                    display_name = %location.display_name,
                    "resolved location"
                );
                self.session = Some(SearchSession {
                    location: location.clone(),
                    category: category.to_owned(),
                });
                (location, category.to_owned(), RADIUS_TIERS_KM[0])
            }
            CycleStart::Widen { radius_km } => {
                let session = self.session.as_ref().ok_or(SearchError::SessionLost)?;
                (session.location.clone(), session.category.clone(), radius_km)
            }
        };

        if !location.has_valid_coordinates() {
            return Err(SearchError::InvalidLocation);
        }

        let pois = self
            .client
            .find_pois(
                location.latitude,
                location.longitude,
                radius_km * 1000,
                &category,
            )
            .await?;
        let results: Vec<PointOfInterest> = pois
            .into_iter()
            .map(|poi| annotate_distance(poi, &location))
            .collect();
        tracing::debug!(radius_km, found = results.len(), "search attempt finished");

        Ok(match classify_attempt(radius_km, results.len(), &category) {
            AttemptDecision::Accept => CycleOutcome::Accepted { results },
            AttemptDecision::Prompt {
                next_radius_km,
                message,
            } => CycleOutcome::Prompting {
                results,
                message,
                next_radius_km,
            },
            AttemptDecision::Exhausted { message } => {
                CycleOutcome::ExhaustedAtMax { results, message }
            }
        })
    }
}
