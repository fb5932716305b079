//! Reactive Binding Layer
//!
//! Maps UI events to the charts they refresh.
//!
//! | Trigger | Aggregation | Target |
//! |---|---|---|
//! | year slider, metric dropdown | `sales_by_year_up_to` | line-chart |
//! | metric radio | `correlation_against_critic_score` | scatter-plot |
//! | click on chart1 | `mean_score_and_sales_by_year_for_genre` | chart2 |
//! | click on pie-chart | `rating_distribution_for_genre` | bar-graph |
//! | click on bar-graph | `genre_rating_cross_tabulation` | pie-chart |
//!
//! A click carrying a category filters its target; a click without one puts
//! the target back on its whole-dataset view.

pub mod controls;
pub mod error;
pub mod events;
pub mod selection;
pub mod table;

pub use controls::{Controls, LINE_METRICS, SCATTER_METRICS};
pub use error::{BindingError, BindingResult};
pub use events::{extract_category, ClickField, Trigger, UiEvent};
pub use selection::SelectionState;
pub use table::{bindings, bindings_for, Binding, ChartUpdate, Dispatcher, BINDINGS};
