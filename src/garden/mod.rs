pub mod constants;
pub mod perf;
pub mod population;
pub mod record;
pub mod sim_loop;
pub mod state;
pub mod systems;
