pub mod interval_task;
