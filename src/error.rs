use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("At least {min} players required, only {found} unique players remain")]
    NotEnoughPlayers { min: usize, found: usize },

    #[error("At least 1 court required")]
    InvalidCourtCount,

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(String),

    #[error("Round not found: {0}")]
    RoundNotFound(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
