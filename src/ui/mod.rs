//! UI panel rendering subsystem
//!
//! This module contains all panel rendering logic for the LogAi dashboard:
//! - Sidebar (navigation routes, collapse toggle, theme toggle)
//! - Header (view title, data source controls, service filter)
//! - Overview panel (stat tiles and anomaly trend)
//! - Logs panel (filtered log table)
//! - Anomalies panel (incident list with triage controls)
//! - Chat panel (transcript and draft input)
//! - Settings panel (preferences form)
//! - Status bar (memory, source, refresh age)
//! - Panel manager (panel orchestration and layout)

pub mod anomalies_panel;
pub mod chat_panel;
pub mod header;
pub mod logs_panel;
pub mod overview_panel;
pub mod panel_manager;
pub mod settings_panel;
pub mod sidebar;
pub mod status_bar;
