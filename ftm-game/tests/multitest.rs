use cosmwasm_std::testing::MockApi;
use cosmwasm_std::{coins, Addr, Binary, Empty};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use ftm_achievement_nft::msg::{
    AchievementsResponse, ExecuteMsg as RegistryExecuteMsg,
    InstantiateMsg as RegistryInstantiateMsg, PointsResponse, QueryMsg as RegistryQueryMsg,
};
use ftm_achievement_nft::state::{AchievementMetadata, Rarity};
use ftm_game::contract::{execute, instantiate, query, reply};
use ftm_game::msg::*;

const DENOM: &str = "uftm";
const ONE_FTM: u128 = 1_000_000;

fn registry_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        ftm_achievement_nft::contract::execute,
        ftm_achievement_nft::contract::instantiate,
        ftm_achievement_nft::contract::query,
    ))
}

fn game_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query).with_reply(reply))
}

struct Suite {
    app: App,
    api: MockApi,
    registry: Addr,
    game_code: u64,
}

impl Suite {
    fn new() -> Self {
        let api = MockApi::default();
        let dev = api.addr_make("dev");
        let mut app = App::new(|router, _api, storage| {
            router
                .bank
                .init_balance(storage, &dev, coins(10 * ONE_FTM, DENOM))
                .unwrap();
        });

        let registry_code = app.store_code(registry_contract());
        let game_code = app.store_code(game_contract());
        let registry = app
            .instantiate_contract(
                registry_code,
                api.addr_make("registry_owner"),
                &RegistryInstantiateMsg {
                    name: "FTM Achievements".to_string(),
                    symbol: "FTMACH".to_string(),
                },
                &[],
                "registry",
                None,
            )
            .unwrap();

        Suite {
            app,
            api,
            registry,
            game_code,
        }
    }

    fn addr(&self, name: &str) -> Addr {
        self.api.addr_make(name)
    }

    /// Deploy a game owned by `dev` and fund it with one FTM.
    fn create_game(&mut self) -> Addr {
        let dev = self.addr("dev");
        let game = self
            .app
            .instantiate_contract(
                self.game_code,
                dev.clone(),
                &InstantiateMsg {
                    registry: self.registry.to_string(),
                },
                &[],
                "ftm-game",
                None,
            )
            .unwrap();
        self.app
            .execute_contract(
                dev,
                game.clone(),
                &ExecuteMsg::SupplyFunds {},
                &coins(ONE_FTM, DENOM),
            )
            .unwrap();
        game
    }

    /// Deploy a game and register its catalog.
    fn create_game_with_catalog(&mut self) -> Addr {
        let game = self.create_game();
        let dev = self.addr("dev");
        self.app
            .execute_contract(
                dev,
                game.clone(),
                &ExecuteMsg::SetupAchievementsMetadata {},
                &[],
            )
            .unwrap();
        game
    }

    fn award(&mut self, game: &Addr, user: &Addr, metadata_id: u64) -> Result<AppResponse, String> {
        let dev = self.addr("dev");
        self.app
            .execute_contract(
                dev,
                game.clone(),
                &ExecuteMsg::AwardAchievementOnlyDev {
                    user: user.to_string(),
                    metadata_id,
                },
                &[],
            )
            .map_err(|err| err.root_cause().to_string())
    }

    fn points(&self, user: &Addr, sources: &[&Addr]) -> u64 {
        let res: PointsResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.registry,
                &RegistryQueryMsg::Points {
                    user: user.to_string(),
                    sources: sources.iter().map(|s| s.to_string()).collect(),
                },
            )
            .unwrap();
        res.points
    }

    fn metadata_ids(&self, user: &Addr, sources: &[&Addr], offset: u32, limit: u32) -> Vec<u64> {
        let res: AchievementsResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.registry,
                &RegistryQueryMsg::Achievements {
                    user: user.to_string(),
                    sources: sources.iter().map(|s| s.to_string()).collect(),
                    offset,
                    limit,
                },
            )
            .unwrap();
        res.achievements.iter().map(|a| a.metadata.id).collect()
    }

    fn metadata(&self, id: u64) -> AchievementMetadata {
        self.app
            .wrap()
            .query_wasm_smart(&self.registry, &RegistryQueryMsg::Metadata { id })
            .unwrap()
    }
}

// ─── Catalog setup ──────────────────────────────────────────────────────────

#[test]
fn test_setup_registers_catalog_under_game_address() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();

    let ids: GameAchievementsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&game, &QueryMsg::Achievements {})
        .unwrap();
    assert_eq!(ids.metadata_ids, vec![1, 2, 3]);

    assert_eq!(
        suite.metadata(1),
        AchievementMetadata {
            id: 1,
            source: game.clone(),
            source_name: "The Fantom Dungeon".to_string(),
            rarity: Rarity::Common,
            title: "Defeated first monster".to_string(),
            description: "You have been brave enough to defeat the first monster of 'The Fantom Dungeon'".to_string(),
            points: 5,
        }
    );
    let miniboss = suite.metadata(2);
    assert_eq!(miniboss.rarity, Rarity::Uncommon);
    assert_eq!(miniboss.points, 10);
    let final_boss = suite.metadata(3);
    assert_eq!(final_boss.source, game);
    assert_eq!(final_boss.rarity, Rarity::Epic);
    assert_eq!(final_boss.title, "Defeated final boss");
    assert_eq!(final_boss.points, 50);
}

#[test]
fn test_setup_twice_fails() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();
    let dev = suite.addr("dev");

    let err = suite
        .app
        .execute_contract(
            dev,
            game,
            &ExecuteMsg::SetupAchievementsMetadata {},
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "achievements metadata already set up"
    );
}

#[test]
fn test_second_game_gets_next_ids() {
    let mut suite = Suite::new();
    suite.create_game_with_catalog();
    let game2 = suite.create_game_with_catalog();

    let ids: GameAchievementsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&game2, &QueryMsg::Achievements {})
        .unwrap();
    assert_eq!(ids.metadata_ids, vec![4, 5, 6]);
    assert_eq!(suite.metadata(4).source, game2);
}

// ─── Adventure ──────────────────────────────────────────────────────────────

#[test]
fn test_adventure_awards_catalog_in_order() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();
    let player = suite.addr("player");

    let res = suite
        .app
        .execute_contract(player.clone(), game, &ExecuteMsg::Adventure {}, &[])
        .unwrap();
    let awarded = res
        .events
        .iter()
        .filter(|e| e.ty == "wasm-achievement_awarded")
        .count();
    assert_eq!(awarded, 3);

    assert_eq!(suite.points(&player, &[]), 65);
    assert_eq!(suite.metadata_ids(&player, &[], 0, 9999), vec![1, 2, 3]);
}

#[test]
fn test_adventure_again_skips_held_achievements() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();
    let player = suite.addr("player");

    // Already holds the miniboss before playing
    suite.award(&game, &player, 2).unwrap();

    let res = suite
        .app
        .execute_contract(player.clone(), game.clone(), &ExecuteMsg::Adventure {}, &[])
        .unwrap();
    assert!(res.has_event(
        &cosmwasm_std::Event::new("wasm").add_attribute("awarded", "2")
    ));
    assert_eq!(suite.metadata_ids(&player, &[], 0, 0), vec![2, 1, 3]);

    let res = suite
        .app
        .execute_contract(player.clone(), game, &ExecuteMsg::Adventure {}, &[])
        .unwrap();
    assert!(res.has_event(
        &cosmwasm_std::Event::new("wasm").add_attribute("awarded", "0")
    ));
    assert_eq!(suite.points(&player, &[]), 65);
}

#[test]
fn test_adventure_requires_setup() {
    let mut suite = Suite::new();
    let game = suite.create_game();
    let player = suite.addr("player");

    let err = suite
        .app
        .execute_contract(player, game, &ExecuteMsg::Adventure {}, &[])
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "achievements metadata not set up"
    );
}

// ─── Dev awards ─────────────────────────────────────────────────────────────

#[test]
fn test_award_unknown_metadata_fails() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();
    let addr1 = suite.addr("addr1");

    let err = suite.award(&game, &addr1, 30).unwrap_err();
    assert_eq!(err, "Requested metadata not exist");
}

#[test]
fn test_award_metadata_of_another_game_fails() {
    let mut suite = Suite::new();
    let another_game = suite.create_game();
    suite.create_game_with_catalog();
    let addr1 = suite.addr("addr1");

    let err = suite.award(&another_game, &addr1, 1).unwrap_err();
    assert_eq!(err, "You are not the owner of the metadata");
}

#[test]
fn test_award_same_achievement_twice_fails() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();
    let addr1 = suite.addr("addr1");
    let addr2 = suite.addr("addr2");

    suite.award(&game, &addr1, 1).unwrap();
    suite.award(&game, &addr2, 1).unwrap();
    let err = suite.award(&game, &addr1, 1).unwrap_err();
    assert_eq!(err, "Wallet already own the achievement");
    assert_eq!(suite.points(&addr1, &[]), 5);
}

#[test]
fn test_award_to_game_itself_fails() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();

    let err = suite.award(&game, &game, 1).unwrap_err();
    assert_eq!(err, "Source can't award itself");
}

#[test]
fn test_award_by_non_dev_fails() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();
    let player = suite.addr("player");

    let err = suite
        .app
        .execute_contract(
            player.clone(),
            game,
            &ExecuteMsg::AwardAchievementOnlyDev {
                user: player.to_string(),
                metadata_id: 1,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "unauthorized: only dev can perform this action"
    );
}

#[test]
fn test_award_emits_registry_event() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();
    let addr1 = suite.addr("addr1");

    let res = suite.award(&game, &addr1, 1).unwrap();
    assert!(res.has_event(
        &cosmwasm_std::Event::new("wasm-achievement_awarded")
            .add_attribute("user", addr1.as_str())
            .add_attribute("metadata_id", "1")
    ));
}

#[test]
fn test_points_and_listing_across_games() {
    let mut suite = Suite::new();
    let game1 = suite.create_game_with_catalog();
    let game2 = suite.create_game_with_catalog();
    let game3 = suite.create_game_with_catalog();
    let addr1 = suite.addr("addr1");
    let addr2 = suite.addr("addr2");

    suite.award(&game1, &addr1, 1).unwrap();
    suite.award(&game1, &addr1, 2).unwrap();
    suite.award(&game2, &addr1, 4).unwrap();
    suite.award(&game2, &addr1, 5).unwrap();
    suite.award(&game2, &addr1, 6).unwrap();
    suite.award(&game1, &addr2, 1).unwrap();
    suite.award(&game1, &addr2, 2).unwrap();
    suite.award(&game2, &addr2, 6).unwrap();

    assert_eq!(suite.points(&addr1, &[]), 80);
    assert_eq!(suite.points(&addr1, &[&game1]), 15);
    assert_eq!(suite.points(&addr1, &[&game2]), 65);
    assert_eq!(suite.points(&addr1, &[&game3]), 0);
    assert_eq!(suite.points(&addr2, &[]), 65);
    assert_eq!(suite.points(&addr2, &[&game1]), 15);
    assert_eq!(suite.points(&addr2, &[&game2]), 50);
    assert_eq!(suite.points(&addr2, &[&game3]), 0);

    assert_eq!(suite.metadata_ids(&addr1, &[], 0, 9999), vec![1, 2, 4, 5, 6]);
    assert_eq!(suite.metadata_ids(&addr1, &[], 1, 1), vec![2]);
    assert_eq!(suite.metadata_ids(&addr1, &[&game2], 1, 9999), vec![5, 6]);
    assert!(suite.metadata_ids(&addr1, &[&game3], 0, 9999).is_empty());

    let err = suite
        .app
        .wrap()
        .query_wasm_smart::<AchievementsResponse>(
            &suite.registry,
            &RegistryQueryMsg::Achievements {
                user: addr1.to_string(),
                sources: vec![game2.to_string()],
                offset: 10,
                limit: 9999,
            },
        )
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("Offset is greater than number of records available"));
}

// ─── Soul-bound ─────────────────────────────────────────────────────────────

#[test]
fn test_awarded_achievement_cannot_move() {
    let mut suite = Suite::new();
    let game = suite.create_game_with_catalog();
    let addr1 = suite.addr("addr1");
    let addr2 = suite.addr("addr2");
    suite.award(&game, &addr1, 1).unwrap();

    let err = suite
        .app
        .execute_contract(
            addr1.clone(),
            suite.registry.clone(),
            &RegistryExecuteMsg::TransferNft {
                recipient: addr2.to_string(),
                token_id: 0,
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "The Archievement NFT is soul bound to the user"
    );

    let err = suite
        .app
        .execute_contract(
            addr1,
            suite.registry.clone(),
            &RegistryExecuteMsg::SendNft {
                contract: addr2.to_string(),
                token_id: 0,
                msg: Binary::default(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "The Archievement NFT is soul bound to the user"
    );
}

// ─── Funds ──────────────────────────────────────────────────────────────────

#[test]
fn test_game_is_funded_by_dev() {
    let mut suite = Suite::new();
    let game = suite.create_game();

    let balance: BalanceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &game,
            &QueryMsg::Balance {
                denom: DENOM.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance.amount.amount.u128(), ONE_FTM);

    let dev = suite.addr("dev");
    let err = suite
        .app
        .execute_contract(dev, game, &ExecuteMsg::SupplyFunds {}, &[])
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "no funds sent");
}
