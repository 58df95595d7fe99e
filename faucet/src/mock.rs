use crate as pallet_faucet;
use frame_support::traits::{
    AsEnsureOriginWithArg, ConstU128, ConstU16, ConstU32, ConstU64, Everything,
};
use frame_support::{parameter_types, PalletId};
use frame_system::{EnsureRoot, EnsureSigned};
use sp_core::H256;
use sp_runtime::traits::{BlakeTwo256, IdentityLookup};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Assets: pallet_assets,
        Faucet: pallet_faucet,
    }
);

impl frame_system::Config for Test {
    type BaseCallFilter = Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u64>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ConstU16<42>;
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<5>;
    type WeightInfo = ();
}

impl pallet_balances::Config for Test {
    type Balance = u64;
    type DustRemoval = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ConstU64<1>;
    type AccountStore = System;
    type WeightInfo = ();
    type MaxLocks = ();
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
    type RuntimeHoldReason = RuntimeHoldReason;
    type FreezeIdentifier = ();
    type MaxHolds = ConstU32<0>;
    type MaxFreezes = ConstU32<0>;
}

impl pallet_assets::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = u128;
    type AssetId = u32;
    type AssetIdParameter = u32;
    type Currency = Balances;
    type CreateOrigin = AsEnsureOriginWithArg<EnsureSigned<u64>>;
    type ForceOrigin = EnsureRoot<u64>;
    type AssetDeposit = ConstU64<1>;
    type AssetAccountDeposit = ConstU64<10>;
    type MetadataDepositBase = ConstU64<1>;
    type MetadataDepositPerByte = ConstU64<1>;
    type ApprovalDeposit = ConstU64<1>;
    type StringLimit = ConstU32<50>;
    type Freezer = ();
    type Extra = ();
    type RemoveItemsLimit = ConstU32<1000>;
    type CallbackHandle = ();
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

parameter_types! {
    pub const FaucetPalletId: PalletId = PalletId(*b"py/fauct");
}

impl pallet_faucet::Config for Test {
    type PalletId = FaucetPalletId;
    type RuntimeEvent = RuntimeEvent;
    type AssetBalance = u128;
    type AssetId = u32;
    type Assets = Assets;
    type TimeProvider = Timestamp;
    type ManagerOrigin = EnsureRoot<u64>;
    type RequestAmount = ConstU128<100>;
    type CooldownSeconds = ConstU64<86_400>;
    type WeightInfo = ();
}

pub(crate) const ACCOUNT_A: u64 = 1;
pub(crate) const ACCOUNT_B: u64 = 2;
pub(crate) const INIT_NATIVE_BALANCE: u64 = 1_000_000;
pub(crate) const INIT_BALANCE: u128 = 10_000;
pub(crate) const ASSET_A: u32 = 1;
pub(crate) const ASSET_B: u32 = 2;
pub(crate) const REQUEST_AMOUNT: u128 = 100;
pub(crate) const COOLDOWN_SECONDS: u64 = 86_400;
pub(crate) const NOW: u64 = 1_700_000_000;

pub(crate) fn new_test_ext() -> sp_io::TestExternalities {
    let mut storage = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();
    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(ACCOUNT_A, INIT_NATIVE_BALANCE), (ACCOUNT_B, INIT_NATIVE_BALANCE)],
    }
    .assimilate_storage(&mut storage)
    .unwrap();
    pallet_assets::GenesisConfig::<Test> {
        assets: vec![(ASSET_A, ACCOUNT_A, true, 1), (ASSET_B, ACCOUNT_A, true, 1)],
        metadata: vec![],
        accounts: vec![
            (ASSET_A, ACCOUNT_A, INIT_BALANCE),
            (ASSET_B, ACCOUNT_A, INIT_BALANCE),
        ],
    }
    .assimilate_storage(&mut storage)
    .unwrap();
    let mut test_ext: sp_io::TestExternalities = storage.into();
    test_ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(NOW * 1_000);
    });
    test_ext
}

pub(crate) fn last_event() -> pallet_faucet::Event<Test> {
    System::events()
        .into_iter()
        .map(|r| r.event)
        .filter_map(|e| {
            if let RuntimeEvent::Faucet(inner) = e {
                Some(inner)
            } else {
                None
            }
        })
        .last()
        .unwrap()
}
