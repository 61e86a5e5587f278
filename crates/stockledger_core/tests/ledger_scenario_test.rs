//! Integration test driving a full ledger lifecycle.

use stockledger_core::{LedgerError, StockLedger};

#[test]
fn test_full_session_lifecycle() {
    let mut ledger = StockLedger::with_capacity(2).unwrap();

    // Stock arrives over the week, forcing two growth steps.
    for v in [40, 12, 73, 5, 66] {
        ledger.append(v).unwrap();
        assert!(ledger.capacity() >= ledger.len());
    }
    assert_eq!(ledger.capacity(), 8);
    assert_eq!(ledger.items(), &[40, 12, 73, 5, 66]);

    // A delivery lands in the middle of the list, then gets recalled.
    ledger.insert_at(2, 999).unwrap();
    assert_eq!(ledger.items(), &[40, 12, 999, 73, 5, 66]);
    let at = ledger.find(999).unwrap();
    ledger.delete_at(i32::try_from(at).unwrap()).unwrap();
    assert_eq!(ledger.items(), &[40, 12, 73, 5, 66]);

    // Reporting pass: sort for the printout, reverse for "highest first".
    ledger.sort_ascending();
    assert_eq!(ledger.items(), &[5, 12, 40, 66, 73]);
    ledger.reverse();
    assert_eq!(ledger.items(), &[73, 66, 40, 12, 5]);

    let stats = ledger.stats().unwrap();
    assert_eq!(stats.min, 5);
    assert_eq!(stats.max, 73);
    assert!((stats.average - 39.2).abs() < 1e-9);

    // End-of-quarter shrink keeps only the top entries.
    ledger.reserve(3).unwrap();
    assert_eq!(ledger.items(), &[73, 66, 40]);

    // A bad index during cleanup must not disturb the survivors.
    assert!(matches!(
        ledger.delete_at(3),
        Err(LedgerError::OutOfBounds { index: 3, len: 3 })
    ));
    assert_eq!(ledger.items(), &[73, 66, 40]);

    // Shut down: release everything, twice.
    ledger.reserve(0).unwrap();
    assert!(!ledger.is_allocated());
    ledger.release();
    assert_eq!(ledger.len(), 0);

    // The instance is still usable afterwards.
    ledger.append(1).unwrap();
    assert_eq!(ledger.snapshot(), vec![1]);
}

#[test]
fn test_failed_operations_never_lose_data() {
    let mut ledger = StockLedger::with_capacity_and_limit(4, 4).unwrap();
    for v in [9, 8, 7, 6] {
        ledger.append(v).unwrap();
    }

    // Full and at the limit: every further mutation that needs room fails.
    assert!(ledger.append(5).is_err());
    assert!(ledger.insert_at(0, 5).is_err());
    assert!(ledger.reserve(8).is_err());
    assert!(ledger.reserve(-1).is_err());

    assert_eq!(ledger.items(), &[9, 8, 7, 6]);
    assert_eq!(ledger.capacity(), 4);
}
