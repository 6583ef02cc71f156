//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: title plus the latest status message
//! - `QuantityPicker`: the 1–10 selector next to the name field
//! - `HelpBar`: key hints for the focused area
//! - `StatsFooter`: the progress sentence
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: the draft item (name + quantity), emits `InputEvent`
//! - `ItemList`: selection over the rows, emits `ListEvent`
//! - `ConfirmDialog`: yes/no overlay, emits the decision
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields or constructor
//! arguments), never by reaching into `App`. This keeps dependencies explicit:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! StatsFooter::new(app.stats()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! StatsFooter::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top line)
//! ├── input_box/         (Name field + cursor handling)
//! ├── quantity_picker.rs (1–10 selector)
//! ├── item_list.rs       (The list rows)
//! ├── help_bar.rs        (Key hints)
//! ├── stats_footer.rs    (Progress sentence)
//! └── confirm_dialog.rs  (Yes/no overlay)
//! ```

pub mod confirm_dialog;
mod help_bar;
pub mod input_box;
pub mod item_list;
pub mod quantity_picker;
mod stats_footer;
mod title_bar;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState};
pub use help_bar::HelpBar;
pub use input_box::{InputBox, InputEvent};
pub use item_list::{ItemList, ItemListState, ListEvent};
pub use quantity_picker::QuantityPicker;
pub use stats_footer::StatsFooter;
pub use title_bar::TitleBar;
