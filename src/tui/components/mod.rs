// Components module - UI building blocks of the guide screen
//
// - Title bar: guide name and audience
// - Tab bar: one tab per section, clickable
// - Section banner: active section title and description
// - Card list: collapsible cards plus the closing banner
// - Status bar: key hints and the copied indicator
// - Logs panel: recent diagnostics

pub mod card_body;
pub mod card_list;
pub mod logs_panel;
pub mod section_banner;
pub mod status_bar;
pub mod tab_bar;
pub mod title_bar;
