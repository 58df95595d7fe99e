use crate::{AccountIdOf, Call, Config, Pallet};
use frame_benchmarking::{benchmarks, whitelisted_caller};
use frame_support::pallet_prelude::DispatchResult;
use frame_support::traits::fungibles::{Create, Mutate};
use frame_system::RawOrigin;

const INIT_BALANCE: u128 = 1_000_000_000_000_000;
const INIT_LIQUIDITY: u128 = 1_000_000_000_000;
const ASSET_A: u32 = 1;
const ASSET_B: u32 = 2;
const DEADLINE: u64 = u64::MAX;

fn prepare_pool<T>() -> DispatchResult
where
    T: Config<AssetId = u32, AssetBalance = u128>,
    T::Assets: Create<AccountIdOf<T>> + Mutate<AccountIdOf<T>>,
{
    let caller: T::AccountId = whitelisted_caller();
    let _ = frame_system::Pallet::<T>::inc_providers(&caller);
    T::Assets::create(ASSET_A, caller.clone(), true, 1)?;
    T::Assets::create(ASSET_B, caller.clone(), true, 1)?;
    T::Assets::mint_into(ASSET_A, &caller, INIT_BALANCE)?;
    T::Assets::mint_into(ASSET_B, &caller, INIT_BALANCE)?;
    Pallet::<T>::add_liquidity(
        RawOrigin::Signed(caller.clone()).into(),
        ASSET_A,
        ASSET_B,
        INIT_LIQUIDITY,
        INIT_LIQUIDITY,
        0,
        0,
        caller,
        DEADLINE,
    )?;
    Ok(())
}

fn pool_reserves<T>() -> (u128, u128)
where
    T: Config<AssetId = u32, AssetBalance = u128>,
{
    let pool = Pallet::<T>::pools(Pallet::<T>::pair_key(ASSET_A, ASSET_B).unwrap()).unwrap();
    (pool.reserve_a, pool.reserve_b)
}

benchmarks! {
    where_clause {
        where
            T: Config<AssetId = u32, AssetBalance = u128>,
            T::Assets: Create<AccountIdOf<T>> + Mutate<AccountIdOf<T>>,
    }

    add_liquidity {
        prepare_pool::<T>()?;
        let caller: T::AccountId = whitelisted_caller();
    }: _(RawOrigin::Signed(caller.clone()), ASSET_A, ASSET_B, 1_000, 1_000, 0, 0, caller, DEADLINE)
    verify {
        assert_eq!(pool_reserves::<T>(), (INIT_LIQUIDITY + 1_000, INIT_LIQUIDITY + 1_000));
    }

    remove_liquidity {
        prepare_pool::<T>()?;
        let caller: T::AccountId = whitelisted_caller();
    }: _(RawOrigin::Signed(caller.clone()), ASSET_A, ASSET_B, 1_000, 1, 1, caller, DEADLINE)
    verify {
        assert_eq!(pool_reserves::<T>(), (INIT_LIQUIDITY - 1_000, INIT_LIQUIDITY - 1_000));
    }

    swap_exact_tokens_for_tokens {
        prepare_pool::<T>()?;
        let caller: T::AccountId = whitelisted_caller();
        let amount_in = 500;
        let min_out = 498; // sold amount (500) less the 0.3% provider fee and rounding
    }: _(RawOrigin::Signed(caller.clone()), amount_in, min_out, [ASSET_A, ASSET_B].to_vec(), caller, DEADLINE)
    verify {
        assert_eq!(pool_reserves::<T>(), (INIT_LIQUIDITY + amount_in, INIT_LIQUIDITY - min_out));
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
