use hdwallet::{Account, Coin, DerivationNode, DerivationPath, Error, KeyType, PrivateKey};

// BIP39 seed of "abandon abandon ... abandon about" with an empty passphrase.
const ABANDON_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
                            9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

fn abandon_root() -> PrivateKey {
    PrivateKey::from_seed(&hex::decode(ABANDON_SEED).unwrap(), Coin::Bitcoin).unwrap()
}

fn assert_import(coin: Coin, inputs: &[&str], address: &str, raw: &str) {
    for input in inputs {
        let key = PrivateKey::import(input, coin).unwrap();
        assert_eq!(hex::encode(key.raw()), raw, "{coin} {input}");
        assert_eq!(key.key_type(), KeyType::Imported);
        assert_eq!(key.public_key().unwrap().address().unwrap(), address, "{coin} {input}");
    }
}

#[test]
fn master_key_from_mnemonic_seed() {
    assert_eq!(
        abandon_root().extended().unwrap(),
        "xprv9s21ZrQH143K3GJpoapnV8SFfukcVBSfeCficPSGfubmSFDxo1kuHnLisriDvSnRRuL2Qrg5ggqHKNVpxR86QEC8w35uxmGoggxtQTPvfUu"
    );
}

#[test]
fn bip44_account_keys() {
    let root = abandon_root();
    let by_steps = root
        .derive_child(DerivationNode::Hardened(44))
        .and_then(|k| k.derive_child(DerivationNode::Hardened(0)))
        .and_then(|k| k.derive_child(DerivationNode::Hardened(0)))
        .unwrap();
    let by_path = root.derive_path(&"m/44'/0'/0'".parse().unwrap()).unwrap();
    assert_eq!(by_steps, by_path);

    assert_eq!(
        by_path.extended().unwrap(),
        "xprv9xpXFhFpqdQK3TmytPBqXtGSwS3DLjojFhTGht8gwAAii8py5X6pxeBnQ6ehJiyJ6nDjWGJfZ95WxByFXVkDxHXrqu53WCRGypk2ttuqncb"
    );
    assert_eq!(
        by_path.extended_public().unwrap(),
        "xpub6BosfCnifzxcFwrSzQiqu2DBVTshkCXacvNsWGYJVVhhawA7d4R5WSWGFNbi8Aw6ZRc1brxMyWMzG3DSSSSoekkudhUd9yLb6qx39T9nMdj"
    );
    assert_eq!(by_path.depth(), 3);
}

#[test]
fn bip44_receive_path_for_each_coin() {
    let seed = hex::decode(ABANDON_SEED).unwrap();
    for coin in Coin::ALL {
        let path = DerivationPath::bip44(coin, 0, 0, 0);
        assert_eq!(path.to_string(), format!("m/44'/{}'/0'/0/0", coin.coin_type()));

        let key = PrivateKey::from_seed(&seed, coin)
            .and_then(|root| root.derive_path(&path))
            .unwrap();
        assert_eq!(key.depth(), 5);
        assert_eq!(key.coin(), coin);

        let address = Account::new(key).address().unwrap();
        let expected_prefix = match coin {
            Coin::Bitcoin | Coin::BitcoinCash => "1",
            Coin::Ethereum => "0x",
            Coin::Litecoin => "L",
            Coin::Dash => "X",
            Coin::Dogecoin => "D",
        };
        assert!(address.starts_with(expected_prefix), "{coin}: {address}");
    }
}

#[test]
fn import_bitcoin_keys() {
    assert_import(
        Coin::Bitcoin,
        &[
            "0e66055a963cc3aecb185cf795de476cf290c88db671297da041b7f7377e6f9c",
            "KwhhY7djdc9EMaZw1oCytfVfbXfdrzj6newZnBqVrkyDnKVWiCmJ",
            "5HvdNYs1baLY7vpnmb2osg5gZHvAFxDiBoCujs2vfTjC442rzSK",
        ],
        "1MVEQHYUv1bWiYJB77NNEEEdbmNFEoW5q6",
        "0e66055a963cc3aecb185cf795de476cf290c88db671297da041b7f7377e6f9c",
    );
}

#[test]
fn import_bitcoin_cash_keys() {
    assert_import(
        Coin::BitcoinCash,
        &[
            "0e66055a963cc3aecb185cf795de476cf290c88db671297da041b7f7377e6f9c",
            "5HvdNYs1baLY7vpnmb2osg5gZHvAFxDiBoCujs2vfTjC442rzSK",
            "KwhhY7djdc9EMaZw1oCytfVfbXfdrzj6newZnBqVrkyDnKVWiCmJ",
        ],
        "1MVEQHYUv1bWiYJB77NNEEEdbmNFEoW5q6",
        "0e66055a963cc3aecb185cf795de476cf290c88db671297da041b7f7377e6f9c",
    );
}

#[test]
fn import_litecoin_keys() {
    assert_import(
        Coin::Litecoin,
        &[
            "857cfceb9726ba7165fdcda93c056d35a8ba9b90a8c77fac524a309d832de107",
            "6v8opvTbpSE2WwTv4rhEvSVK1jqGTXKRkWk484gxmc4TtQzDu53",
            "T7XTgWxQgNLVh9PoE2LcSsVxWG43E4pLF4H2nBHP9skHfjshodfM",
        ],
        "Lbre6AY3tc8X2GJ2tKERVvcCA4S2EzF6wJ",
        "857cfceb9726ba7165fdcda93c056d35a8ba9b90a8c77fac524a309d832de107",
    );
}

#[test]
fn imported_keys_cannot_derive() {
    let key = PrivateKey::import(
        "T7XTgWxQgNLVh9PoE2LcSsVxWG43E4pLF4H2nBHP9skHfjshodfM",
        Coin::Litecoin,
    )
    .unwrap();
    for node in [DerivationNode::Hardened(0), DerivationNode::NotHardened(0)] {
        assert_eq!(key.derive_child(node), Err(Error::DerivationNotSupported));
    }
}

#[test]
fn decoded_account_key_keeps_deriving() {
    let account = abandon_root().derive_path(&"m/44'/0'/0'".parse().unwrap()).unwrap();
    let decoded = PrivateKey::decode_extended(&account.extended().unwrap()).unwrap();
    assert_eq!(decoded, account);
    assert_eq!(decoded.depth(), account.depth());
    assert_eq!(decoded.parent_fingerprint(), account.parent_fingerprint());

    let tail: DerivationPath = "m/0/7".parse().unwrap();
    assert_eq!(
        decoded.derive_path(&tail).unwrap().extended().unwrap(),
        account.derive_path(&tail).unwrap().extended().unwrap()
    );
}
