//! # Fetch Flows
//!
//! End to end: derive an address, read it through the storage port, decode,
//! and re-serialize to the JSON transport form.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dip_accounts::{
        AccountClient, AccountError, AccountRecord, AccountStore, Address, AnyAccount, ClientConfig, Forest,
        InMemoryAccountStore, Node, StoreError, StoredAccount, Tag, Tree, PROGRAM_ID,
        TOKEN_PROGRAM_ID,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const FOREST_ID: Address = Address::new([0x42; 32]);
    const VOTE_MINT: Address = Address::new([0x07; 32]);
    const ADMIN: Address = Address::new([0xAD; 32]);

    /// Store shared between the test and the client
    struct SharedStore(Arc<InMemoryAccountStore>);

    #[async_trait::async_trait]
    impl AccountStore for SharedStore {
        async fn get_account(
            &self,
            address: &Address,
        ) -> Result<Option<StoredAccount>, StoreError> {
            self.0.get_account(address).await
        }
    }

    /// A forest with one tree, its root node and one child.
    fn seeded_store() -> (Arc<InMemoryAccountStore>, Forest, Tree, Node, Node) {
        let store = Arc::new(InMemoryAccountStore::new());

        let forest = Forest::new(FOREST_ID, VOTE_MINT, ADMIN, 1_000);
        let forest_address = forest.address().unwrap();
        let tree = Tree::for_forest(forest_address, Tag::new("rust").unwrap()).unwrap();
        let root_node = Node::new(tree.address().unwrap(), Address::ZERO, tree.tag().clone(), 0);
        let child = Node::new(
            tree.address().unwrap(),
            root_node.address().unwrap(),
            Tag::new("async").unwrap(),
            u64::MAX,
        );

        store.insert_record(forest_address, &forest).unwrap();
        store.insert_record(tree.address().unwrap(), &tree).unwrap();
        store.insert_record(tree.root_node(), &root_node).unwrap();
        store.insert_record(child.address().unwrap(), &child).unwrap();

        (store, forest, tree, root_node, child)
    }

    // =============================================================================
    // SINGLE FETCH
    // =============================================================================

    /// Walk forest → tree → root node → child purely by rederiving addresses
    #[tokio::test]
    async fn test_walk_hierarchy_by_derivation() {
        let (store, forest, tree, root_node, child) = seeded_store();
        let client = AccountClient::new(SharedStore(store));

        let forest_address = Forest::derive_address(&FOREST_ID).unwrap();
        let fetched_forest = client.fetch::<Forest>(&forest_address).await.unwrap().unwrap();
        assert_eq!(fetched_forest, forest);

        let tree_address = fetched_forest.tree_address(&Tag::new("rust").unwrap()).unwrap();
        let fetched_tree = client.fetch::<Tree>(&tree_address).await.unwrap().unwrap();
        assert_eq!(fetched_tree, tree);

        let fetched_root = client
            .fetch::<Node>(&fetched_tree.root_node())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched_root, root_node);
        assert!(fetched_root.is_root());

        let child_address = fetched_root.child_address(&Tag::new("async").unwrap()).unwrap();
        let fetched_child = client.fetch::<Node>(&child_address).await.unwrap().unwrap();
        assert_eq!(fetched_child, child);
        assert_eq!(fetched_child.stake(), u64::MAX);
    }

    #[tokio::test]
    async fn test_not_yet_created_tree_is_none() {
        let (store, forest, ..) = seeded_store();
        let client = AccountClient::new(SharedStore(store));

        let missing = forest.tree_address(&Tag::new("go").unwrap()).unwrap();
        assert_eq!(client.fetch::<Tree>(&missing).await, Ok(None));
    }

    #[tokio::test]
    async fn test_foreign_owner_never_decodes() {
        let (store, forest, ..) = seeded_store();
        let address = forest.address().unwrap();
        store
            .insert(address, StoredAccount::new(TOKEN_PROGRAM_ID, forest.encode()))
            .unwrap();

        let client = AccountClient::new(SharedStore(store));
        assert!(matches!(
            client.fetch::<Forest>(&address).await,
            Err(AccountError::Ownership { expected, actual })
                if expected == PROGRAM_ID && actual == TOKEN_PROGRAM_ID
        ));
    }

    // =============================================================================
    // BATCH FETCH
    // =============================================================================

    /// fetch_many([a1, a2, a3]) with a2 absent
    #[tokio::test]
    async fn test_batch_with_gap_keeps_input_order() {
        let (store, _, tree, root_node, child) = seeded_store();
        let client = AccountClient::new(SharedStore(store));

        let a1 = child.address().unwrap();
        let a2 = tree.node_address(&Address::ZERO, &Tag::new("missing").unwrap()).unwrap();
        let a3 = tree.root_node();

        let results = client.fetch_many::<Node>(&[a1, a2, a3]).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(Some(child)));
        assert_eq!(results[1], Ok(None));
        assert_eq!(results[2], Ok(Some(root_node)));
    }

    #[tokio::test]
    async fn test_batch_any_across_chunks() {
        let (store, forest, tree, root_node, child) = seeded_store();
        let client =
            AccountClient::with_config(SharedStore(store), ClientConfig::for_testing()).unwrap();

        let addresses = vec![
            forest.address().unwrap(),
            tree.address().unwrap(),
            Address::new([0xEE; 32]),
            tree.root_node(),
            child.address().unwrap(),
        ];
        let results = client.fetch_many_any(&addresses).await.unwrap();

        let names: Vec<Option<&str>> = results
            .iter()
            .map(|r| r.as_ref().unwrap().as_ref().map(|a| a.name()))
            .collect();
        assert_eq!(
            names,
            vec![Some("Forest"), Some("Tree"), None, Some("Node"), Some("Node")]
        );
        assert_eq!(results[3], Ok(Some(AnyAccount::Node(root_node))));
    }

    // =============================================================================
    // TRANSPORT FORM
    // =============================================================================

    #[tokio::test]
    async fn test_fetched_entity_to_json_and_back() {
        let (store, _, _, _, child) = seeded_store();
        let client = AccountClient::new(SharedStore(store));

        let fetched = client
            .fetch_any(&child.address().unwrap())
            .await
            .unwrap()
            .unwrap();
        let value = serde_json::to_value(fetched.to_json()).unwrap();
        assert_eq!(value["type"], "node");
        assert_eq!(value["tag"], "async");
        assert_eq!(value["stake"], "18446744073709551615");

        let parsed = serde_json::from_value(value).unwrap();
        assert_eq!(AnyAccount::from_json(&parsed).unwrap(), fetched);
    }
}
