use backend::db::txn_policy::{current, set_txn_policy, TxnPolicy};

#[test]
fn policy_is_rollback_for_this_binary() {
    assert_eq!(current(), TxnPolicy::RollbackOnOk);
}

#[test]
fn later_sets_are_ignored() {
    set_txn_policy(TxnPolicy::CommitOnOk);
    assert_eq!(current(), TxnPolicy::RollbackOnOk);
}
