pub mod config;
pub mod context;
pub mod converge;
pub mod gradient;
pub mod init;
pub mod project;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{load_config, print_error};
pub use converge::{all_pair_reports, convergence_report, run_converge};
pub use gradient::{gradient_reports, run_gradient};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use project::{projection_report, run_project};
