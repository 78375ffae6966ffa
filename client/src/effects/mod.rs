pub mod effect_dispatcher;
