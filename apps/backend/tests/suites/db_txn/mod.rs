pub mod txn_policy;
