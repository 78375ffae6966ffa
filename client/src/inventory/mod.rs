pub mod inventory_reconciler;
