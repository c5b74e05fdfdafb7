use crate::map::generator;
use crate::map::models::LatLng;
use serde::Serialize;

/// What one client tab is currently looking at. `DetailShown` and `AllShown`
/// are modal overlays stacked on the list view; at most one is open at a time.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewState {
    Idle,
    ListShown,
    DetailShown {
        #[serde(rename = "selectedIndex")]
        selected_index: usize,
    },
    AllShown,
}

/// Reasons a view transition gets rejected. These map onto controls the
/// frontend keeps disabled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ViewStateError {
    NothingGenerated,
    OverlayAlreadyOpen,
    DetailNotOpen,
    OverviewNotOpen,
    NoSuchLocation,
}

#[derive(Clone, Debug)]
pub struct Session {
    pub locations: Vec<LatLng>,
    pub view: ViewState,
}

impl Session {
    pub fn new() -> Self {
        Session {
            locations: Vec::new(),
            view: ViewState::Idle,
        }
    }

    /// Replaces the whole list and drops any open overlay. An empty batch
    /// (non-positive quantity) leaves the tab back at `Idle`, so `ListShown`
    /// never coexists with an empty list.
    pub fn regenerate(&mut self, quantity: i64) {
        self.locations = generator::random_locations(quantity);
        self.view = if self.locations.is_empty() {
            ViewState::Idle
        } else {
            ViewState::ListShown
        };
    }

    pub fn select(&mut self, index: usize) -> Result<LatLng, ViewStateError> {
        match self.view {
            ViewState::ListShown => {}
            ViewState::Idle => return Err(ViewStateError::NothingGenerated),
            ViewState::DetailShown { .. } | ViewState::AllShown => {
                return Err(ViewStateError::OverlayAlreadyOpen)
            }
        }
        match self.locations.get(index) {
            Some(&location) => {
                self.view = ViewState::DetailShown {
                    selected_index: index,
                };
                Ok(location)
            }
            None => Err(ViewStateError::NoSuchLocation),
        }
    }

    pub fn close_detail(&mut self) -> Result<(), ViewStateError> {
        match self.view {
            ViewState::DetailShown { .. } => {
                self.view = ViewState::ListShown;
                Ok(())
            }
            _ => Err(ViewStateError::DetailNotOpen),
        }
    }

    pub fn show_all(&mut self) -> Result<(), ViewStateError> {
        match self.view {
            ViewState::ListShown => {
                self.view = ViewState::AllShown;
                Ok(())
            }
            ViewState::Idle => Err(ViewStateError::NothingGenerated),
            ViewState::DetailShown { .. } | ViewState::AllShown => {
                Err(ViewStateError::OverlayAlreadyOpen)
            }
        }
    }

    pub fn close_all(&mut self) -> Result<(), ViewStateError> {
        match self.view {
            ViewState::AllShown => {
                self.view = ViewState::ListShown;
                Ok(())
            }
            _ => Err(ViewStateError::OverviewNotOpen),
        }
    }
}
