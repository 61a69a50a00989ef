use super::*;
use hex_literal::hex;

fn sepolia_header() -> BlockHeader {
    BlockHeader {
        slot: 5_151_035,
        proposer_index: 1_959,
        parent_root: hex!("64331200f34a330e14d5673ffa353f1348826d75830697f6b0750ba42bcabc5e")
            .into(),
        state_root: hex!("a605d19e8b3e188fb6df208784d22ce820bbf2f91a32ac92e7d4f99d91ab04bb").into(),
        body_root: hex!("1d63bb6d5e875871045cfb7b4776b18bc4bd3c8372950ee92e3e5458c3a187f2").into(),
    }
}

#[test]
fn sepolia_slot_5_151_035() {
    // curl -X 'GET' 'http://{Sepolia Beacon API URL}/eth/v1/beacon/headers/5151035' -H 'accept: application/json'
    // https://sepolia.beaconcha.in/slot/5151035

    let block_root: Hash256 =
        hex!("4017f0180aa9acb2601ab3ce066081a41661b7f85683901f1cadaec7b6198059").into();

    assert_eq!(block_root, sepolia_header().tree_hash_root());
}

#[test]
fn ethereum_slot_9_230_177() {
    // curl -X 'GET' 'https://www.lightclientdata.org/eth/v1/beacon/headers/9230177' -H 'accept: application/json'
    // https://beaconcha.in/slot/9230177

    let block_root: Hash256 =
        hex!("8a71cd9567f3ef85fc5e0dae0fcc6acd707f87b63e9a3174d4ec80395ab31763").into();
    let beacon_header = BlockHeader {
        slot: 9_230_177,
        proposer_index: 404_728,
        parent_root: hex!("c00156add0e86e806b98c9a6367942d451770febb9a3dfcc79f6364863b749fa")
            .into(),
        state_root: hex!("01556da441fbe34b5c60c5192790358456228733f3ee874c32920a400771d1c1").into(),
        body_root: hex!("d0b99a73709763a46384de415ced4e806cb00ea0b54b61ddc69b5e8ac1bd8b4a").into(),
    };

    assert_eq!(block_root, beacon_header.tree_hash_root());
}

#[test]
fn holesky_slot_1_820_966() {
    // curl -X 'GET' 'http://{Holesky Beacon API URL}/eth/v1/beacon/headers/1820966' -H 'accept: application/json'
    // https://holesky.beaconcha.in/slot/1820966

    let block_root: Hash256 =
        hex!("f26e90bf3731062e91354e205f2b4720ab5340b2925162e9233e9480ca09b8af").into();
    let beacon_header = BlockHeader {
        slot: 1_820_966,
        proposer_index: 1_634_770,
        parent_root: hex!("64da2bfc359d4559c319d0b48bbbdad2a4fcd4b83f384467e0b1f3575ed0a253")
            .into(),
        state_root: hex!("de17bcaecddcb0d688cace7741b0bb1aee83cb843d5f020d9b9050bfa7bc4c3f").into(),
        body_root: hex!("347b3f6235c17a38859280d909a01b249ef206f2884eeeffb210ad54646a4dac").into(),
    };

    assert_eq!(block_root, beacon_header.tree_hash_root());
}

#[test]
fn header_json_uses_quoted_integers() {
    let json = serde_json::to_value(sepolia_header()).unwrap();

    assert_eq!(json["slot"], "5151035");
    assert_eq!(json["proposer_index"], "1959");
    assert_eq!(
        json["body_root"],
        "0x1d63bb6d5e875871045cfb7b4776b18bc4bd3c8372950ee92e3e5458c3a187f2"
    );

    let decoded: BlockHeader = serde_json::from_str(&json.to_string()).unwrap();
    assert_eq!(decoded, sepolia_header());
}

#[test]
fn header_builds_encoded_sizes() {
    let header = sepolia_header();
    assert_eq!(header.as_ssz_bytes().len(), BLOCK_HEADER_SSZ_LEN);
    assert_eq!(<BlockHeader as Encode>::ssz_fixed_len(), BLOCK_HEADER_SSZ_LEN);

    let tee_header = TeeBlockHeader::from(header.clone());
    let encoded = tee_header.as_ssz_bytes();
    assert_eq!(encoded.len(), TEE_BLOCK_HEADER_SSZ_LEN);
    assert_eq!(
        <TeeBlockHeader as Encode>::ssz_fixed_len(),
        TEE_BLOCK_HEADER_SSZ_LEN
    );
    // the baseline fields keep their position
    assert_eq!(&encoded[..BLOCK_HEADER_SSZ_LEN], &header.as_ssz_bytes()[..]);
}

#[test]
fn only_tee_header_exposes_proposer_fields() {
    let mut header = sepolia_header();
    assert!(header.proposer_tee_fields().is_none());

    let mut tee_header = TeeBlockHeader::from(sepolia_header());
    let fields = tee_header.proposer_tee_fields().unwrap();
    fields.proposer_tee_type().unwrap().store(2);
    fields
        .proposer_tee_quote()
        .unwrap()
        .write(&[0xaa; TEE_QUOTE_LENGTH]);

    assert_eq!(tee_header.proposer_tee_type, 2);
    assert!(tee_header.proposer_tee_quote.as_ref().iter().all(|b| *b == 0xaa));
}

#[test]
fn quote_slots() {
    let mut fixed = [0xffu8; 6];
    QuoteSlot::Fixed(&mut fixed).write(&[1, 2, 3]);
    assert_eq!(fixed, [1, 2, 3, 0, 0, 0]);

    let mut short = [0u8; 2];
    QuoteSlot::Fixed(&mut short).write(&[1, 2, 3]);
    assert_eq!(short, [1, 2]);

    let mut variable = vec![9u8; 10];
    QuoteSlot::Variable(&mut variable).write(&[1, 2, 3]);
    assert_eq!(variable, vec![1, 2, 3]);
}

#[test]
fn tee_type_slot_widths() {
    let mut narrow = 0u8;
    let mut wide = 0u64;
    let mut signed = 0i8;
    let mut signed_wide = 0i64;

    narrow.store(1);
    wide.store(2);
    signed.store(2);
    signed_wide.store(1);

    assert_eq!((narrow, wide, signed, signed_wide), (1, 2, 2, 1));
}

#[test]
fn sync_committee_encoding_is_fixed_size() {
    let committee = SyncCommittee {
        pubkeys: base_types::Vector::repeat(BLSPubKey::from([1; 48]), 32),
        aggregate_pubkey: BLSPubKey::from([2; 48]),
    };

    let encoded = committee.as_ssz_bytes();
    assert!(<SyncCommittee as Encode>::is_ssz_fixed_len());
    assert_eq!(encoded.len(), 33 * 48);
    assert_eq!(committee.ssz_bytes_len(), 33 * 48);
    assert_eq!(&encoded[32 * 48..], &[2; 48][..]);
}

#[test]
fn empty_sync_aggregate() {
    let aggregate = SyncAggregate::empty(512);

    assert_eq!(aggregate.as_ssz_bytes(), vec![0; 64 + 96]);
    assert_eq!(
        serde_json::to_value(&aggregate).unwrap()["sync_committee_bits"],
        format!("0x{}", "00".repeat(64))
    );
}

#[test]
fn data_version_names() {
    assert_eq!(DataVersion::Electra.to_string(), "electra");
    assert_eq!(DataVersion::Electra.previous(), DataVersion::Deneb);
    assert_eq!(DataVersion::Deneb.previous(), DataVersion::Capella);
}
