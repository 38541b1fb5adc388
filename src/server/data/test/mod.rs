mod drone;
mod mission;
mod schedule;
