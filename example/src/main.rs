use btc_keysign::{
    key::{PrivKey, PubKey},
    address::Address,
    signer::Signer,
    verifier::Verifier,
    util::{Network, ScriptType}
};

fn main() {
    sign_and_verify();
}

fn sign_and_verify() {
    let network = Network::Bitcoin;
    let message = "this message was signed by me";

    let private_key: PrivKey = PrivKey::new_rand();
    let wif: String = private_key.to_wif(network);
    let public_key: PubKey = PubKey::from_privkey(&private_key).unwrap();
    let p2pkh: String = Address::from_privkey(&wif, ScriptType::P2PKH, network).unwrap();
    let p2wpkh: String = Address::from_privkey(&wif, ScriptType::P2WPKH, network).unwrap();

    let signature: String = Signer::sign_message(&wif, message).unwrap();
    let revealed: String = Verifier::reveal_address(&signature, message, ScriptType::P2PKH, network).unwrap();
    let verified = Verifier::with_signature(&p2wpkh, &signature, message, network).unwrap();

    println!(
        "
        WIF:              {}\n
        Public Key:       {}\n
        P2PKH Address:    {}\n
        P2WPKH Address:   {}\n
        Message:          {}\n
        Signature:        {}\n
        Revealed Address: {}\n
        Verified:         {}
        ", wif, public_key, p2pkh, p2wpkh, message, signature, revealed, verified
    );
}
