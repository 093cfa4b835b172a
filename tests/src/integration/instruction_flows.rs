//! # Instruction Flows
//!
//! Instructions assembled from fetched state must reference exactly the
//! accounts the entity layer derives.

#[cfg(test)]
mod tests {
    use dip_accounts::{
        create_forest, create_node, create_tree, instruction_discriminator, set_forest,
        AccountClient, Address, Forest, InMemoryAccountStore, Instruction, Node, Tag, Tree,
        PROGRAM_ID, SYSTEM_PROGRAM_ID,
    };

    const SIGNER: Address = Address::new([0x5A; 32]);
    const ADMIN: Address = Address::new([0xAD; 32]);
    const FOREST_ID: Address = Address::new([0x42; 32]);
    const VOTE_MINT: Address = Address::new([0x07; 32]);

    fn addresses(ix: &Instruction) -> Vec<Address> {
        ix.accounts.iter().map(|m| m.address).collect()
    }

    #[test]
    fn test_create_forest_matches_entity_helpers() {
        let forest = Forest::new(FOREST_ID, VOTE_MINT, ADMIN, 250);
        let ix = create_forest(SIGNER, FOREST_ID, VOTE_MINT, ADMIN, 250).unwrap();

        let accounts = addresses(&ix);
        assert_eq!(accounts[1], forest.authority().unwrap());
        assert_eq!(accounts[2], forest.address().unwrap());
        assert_eq!(accounts[4], forest.vote_account().unwrap());
        assert!(accounts.contains(&SYSTEM_PROGRAM_ID));

        // args reuse the record encoding for the same fields
        assert_eq!(&ix.data[..8], &instruction_discriminator("create_forest"));
        assert_eq!(&ix.data[8..40], FOREST_ID.as_bytes());
        assert_eq!(&ix.data[40..72], ADMIN.as_bytes());
        assert_eq!(&ix.data[72..80], &250u64.to_le_bytes());
    }

    #[tokio::test]
    async fn test_create_tree_from_fetched_forest() {
        let store = InMemoryAccountStore::new();
        let forest = Forest::new(FOREST_ID, VOTE_MINT, ADMIN, 250);
        store.insert_record(forest.address().unwrap(), &forest).unwrap();
        let client = AccountClient::new(store);

        let fetched = client
            .fetch::<Forest>(&Forest::derive_address(&FOREST_ID).unwrap())
            .await
            .unwrap()
            .unwrap();

        let tag = Tag::new("rust").unwrap();
        let ix = create_tree(SIGNER, fetched.id(), fetched.vote_mint(), fetched.admin(), &tag)
            .unwrap();

        let expected_tree = Tree::for_forest(fetched.address().unwrap(), tag).unwrap();
        let accounts = addresses(&ix);
        assert_eq!(accounts[7], expected_tree.address().unwrap());
        assert_eq!(accounts[8], expected_tree.root_node());
        assert_eq!(ix.signers(), vec![SIGNER]);
    }

    #[test]
    fn test_create_node_chain() {
        let forest = Forest::derive_address(&FOREST_ID).unwrap();
        let root_tag = Tag::new("rust").unwrap();
        let tree = Tree::for_forest(forest, root_tag).unwrap();

        let tag = Tag::new("serde").unwrap();
        let ix = create_node(SIGNER, FOREST_ID, tree.address().unwrap(), tree.root_node(), &tag)
            .unwrap();

        let expected = Node::derive_address(&tree.address().unwrap(), &tree.root_node(), &tag)
            .unwrap();
        assert_eq!(addresses(&ix)[4], expected);
        assert_eq!(&ix.data[8..12], &5u32.to_le_bytes());
        assert_eq!(&ix.data[12..], b"serde");
    }

    #[test]
    fn test_set_forest_targets_forest_pda() {
        let ix = set_forest(ADMIN, FOREST_ID, SIGNER, 0).unwrap();
        assert_eq!(ix.program_id, PROGRAM_ID);
        assert_eq!(ix.accounts[1].address, Forest::derive_address(&FOREST_ID).unwrap());
    }

    #[test]
    fn test_instruction_serializes_with_base58_addresses() {
        let ix = set_forest(ADMIN, Address::ZERO, SIGNER, 0).unwrap();
        let value = serde_json::to_value(&ix).unwrap();
        assert_eq!(
            value["programId"],
            "7rxT36fYNGHB1hfXstL79FaFuVgZXzYCiM7yVJ7cdipD"
        );
        assert_eq!(
            value["accounts"][1]["address"],
            "EdzraN4LGZGe7NofvbE2QYYZtkm9RfmQipWAhpsGUjxw"
        );
        assert_eq!(value["accounts"][0]["isSigner"], true);
    }
}
