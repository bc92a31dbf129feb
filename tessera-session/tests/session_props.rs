use proptest::prelude::*;
use tessera::{Error, Wallet};
use tessera_session::{Chain, Session, SessionOptions, WalletRecord};

const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn session_with(chain: Chain, count: usize) -> Session {
    let mut session = Session::new(SessionOptions::default());
    session.select_chain(chain).unwrap();
    session.generate_wallet(Some(TEST_MNEMONIC)).unwrap();
    for _ in 1..count {
        session.add_wallet().unwrap();
    }
    session
}

fn public_keys(session: &Session) -> Vec<String> {
    session
        .wallets()
        .iter()
        .map(|e| e.record.public_key().to_owned())
        .collect()
}

#[test]
fn test_remove_middle_of_three() {
    let mut session = session_with(Chain::Solana, 3);
    let removed = session.remove_wallet(1).unwrap();

    assert_eq!(removed.public_key(), "GKreMsHvt8A79VApjboYDq3J4ZCXSJRYYQk9BscMbi1H");
    assert_eq!(
        public_keys(&session),
        [
            "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk",
            "9RYreF1nBs8Gvq94ACMBtVSVAVUBKSB9p6xdJBFyGApo",
        ]
    );
}

#[test]
fn test_unsupported_coin_type_yields_no_record() {
    let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();

    let err = WalletRecord::derive(&wallet, 9999, 0).unwrap_err();
    assert_eq!(err, Error::UnsupportedCoinType(9999));
    assert!(err.is_user_error());

    let path = "m/44'/9999'/0'/0'".parse().unwrap();
    assert_eq!(
        WalletRecord::derive_at(&wallet, path).unwrap_err(),
        Error::UnsupportedCoinType(9999)
    );
}

#[test]
fn test_solana_private_key_is_keypair() {
    let session = session_with(Chain::Solana, 1);
    let record = &session.wallets().get(0).unwrap().record;

    let bytes = bs58::decode(record.private_key()).into_vec().unwrap();
    assert_eq!(bytes.len(), 64);
    assert_eq!(
        bs58::encode(&bytes[32..]).into_string(),
        record.public_key()
    );
}

#[test]
fn test_records_keep_their_own_phrase() {
    let mut session = session_with(Chain::Ethereum, 1);
    session.generate_wallet(None).unwrap();

    let first = &session.wallets().get(0).unwrap().record;
    let second = &session.wallets().get(1).unwrap().record;
    assert_eq!(first.mnemonic(), TEST_MNEMONIC);
    assert_eq!(Some(second.mnemonic()), session.mnemonic());
    assert_ne!(first.mnemonic(), second.mnemonic());
    assert_eq!(second.path().to_string(), "m/44'/60'/0'/1'");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn removal_preserves_relative_order(
        count in 1usize..6,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        let mut session = session_with(Chain::Solana, count);
        let mut expected = public_keys(&session);

        for pick in picks {
            if expected.is_empty() {
                break;
            }
            let index = pick.index(expected.len());
            let removed = session.remove_wallet(index).unwrap();
            prop_assert_eq!(removed.public_key(), expected.remove(index));
            prop_assert_eq!(public_keys(&session), expected.clone());
        }
    }

    #[test]
    fn out_of_bounds_removal_is_rejected(count in 0usize..4, extra in 0usize..3) {
        let mut session = Session::default();
        session.select_chain(Chain::Ethereum).unwrap();
        if count > 0 {
            session.generate_wallet(Some(TEST_MNEMONIC)).unwrap();
            for _ in 1..count {
                session.add_wallet().unwrap();
            }
        }
        let index = count + extra;
        prop_assert_eq!(
            session.remove_wallet(index).unwrap_err(),
            Error::IndexOutOfBounds { index, len: count }
        );
        prop_assert_eq!(session.wallets().len(), count);
    }

    #[test]
    fn chain_is_locked_to_first_record(use_solana in any::<bool>()) {
        let (first, other) = if use_solana {
            (Chain::Solana, Chain::Ethereum)
        } else {
            (Chain::Ethereum, Chain::Solana)
        };
        let mut session = session_with(first, 1);
        let locked = matches!(session.select_chain(other), Err(Error::ChainLocked { .. }));
        prop_assert!(locked);
        session.clear();
        prop_assert!(session.select_chain(other).is_ok());
    }
}
