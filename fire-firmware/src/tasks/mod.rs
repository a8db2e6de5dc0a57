// Task-Modul: Enthält alle Embassy Tasks
//
// Das Demo hat genau einen Task: die Animations-Schleife. Display-Redraw
// läuft jede Iteration, der LED-Strip zeitgesteuert alle 250 ms - beides
// im selben logischen Loop, ohne Channels oder geteilten Zustand.

pub mod animation;

// Re-export Task für einfachen Import
pub use animation::animation_task;
