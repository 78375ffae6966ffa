pub mod membership_router;
