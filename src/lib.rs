//! # Swap pallet
//!
//! ## Overview
//!
//! This pallet implements a Uniswap-V2-style exchange for pairs of fungible assets.
//! Any two distinct assets form a pair identified by an order-independent key; the
//! pool of a pair is created lazily on the first liquidity deposit. Liquidity
//! providers receive a per-pool liquidity token representing a proportional claim
//! on the pool's reserves, and trades are priced by the constant-product rule with
//! a provider fee that accrues to the remaining liquidity holders.
//! Spot prices and trade quotes can be queried by custom RPC methods.
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(test)]
mod mock;
pub mod rpc;
pub mod weights;

use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
type AssetIdOf<T> = <T as Config>::AssetId;
type AssetBalanceOf<T> = <T as Config>::AssetBalance;

/// Fixed-point unit for spot prices: a quote is
/// `reserve_out * SPOT_PRICE_SCALE / reserve_in`, regardless of how many
/// decimals the assets themselves use. Callers rescale with the output
/// asset's decimals.
pub const SPOT_PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use codec::EncodeLike;
    use frame_support::{
        pallet_prelude::*,
        sp_runtime::traits::{
            AccountIdConversion, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Convert,
            IntegerSquareRoot, One, Zero,
        },
        traits::{
            fungibles::{Create, Inspect, Mutate},
            tokens::{Balance, Fortitude, Precision, Preservation, WithdrawConsequence},
            UnixTime,
        },
        transactional, PalletId,
    };
    use frame_system::pallet_prelude::*;
    use sp_std::fmt::Debug;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Pallet ID. The pallet's sovereign account holds all pool reserves.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// The overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The balance type for assets (i.e. tokens).
        type AssetBalance: Balance
            + MaxEncodedLen
            + MaybeSerializeDeserialize
            + TypeInfo
            + Into<u128>;

        /// The asset ID type.
        type AssetId: MaybeSerializeDeserialize
            + MaxEncodedLen
            + TypeInfo
            + Clone
            + Debug
            + PartialEq
            + EncodeLike
            + Decode
            + Ord;

        /// The type for tradable assets.
        type Assets: Inspect<Self::AccountId, AssetId = Self::AssetId, Balance = Self::AssetBalance>
            + Mutate<Self::AccountId>;

        /// The type for liquidity tokens.
        type AssetRegistry: Inspect<Self::AccountId, AssetId = Self::AssetId, Balance = Self::AssetBalance>
            + Mutate<Self::AccountId>
            + Create<Self::AccountId>;

        /// Derivation of a pool's liquidity token ID from its canonical asset
        /// pair. Must be deterministic, so that the ID can be recomputed by
        /// anyone before the pool exists.
        type PairToLiquidityTokenId: Convert<(Self::AssetId, Self::AssetId), Self::AssetId>;

        /// Source of the current Unix timestamp, used to evaluate operation
        /// deadlines.
        type TimeProvider: UnixTime;

        /// Information on runtime weights.
        type WeightInfo: WeightInfo;

        /// Provider fee numerator.
        #[pallet::constant]
        type ProviderFeeNumerator: Get<Self::AssetBalance>;

        /// Provider fee denominator.
        #[pallet::constant]
        type ProviderFeeDenominator: Get<Self::AssetBalance>;
    }

    pub trait ConfigHelper: Config {
        fn pallet_account() -> AccountIdOf<Self>;
        fn net_amount_numerator() -> AssetBalanceOf<Self>;
    }

    impl<T: Config> ConfigHelper for T {
        #[inline(always)]
        fn pallet_account() -> AccountIdOf<Self> {
            Self::PalletId::get().into_account_truncating()
        }

        #[inline(always)]
        fn net_amount_numerator() -> AssetBalanceOf<Self> {
            Self::ProviderFeeDenominator::get()
                .checked_sub(&Self::ProviderFeeNumerator::get())
                .expect("Provider fee shouldn't be greater than 100%")
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new pool was created [asset_a, asset_b, liquidity_token_id]
        PoolCreated(AssetIdOf<T>, AssetIdOf<T>, AssetIdOf<T>),
        /// Liquidity was added to a pool
        /// [provider, recipient, asset_a, asset_b, amount_a, amount_b, liquidity_minted]
        LiquidityAdded(
            T::AccountId,
            T::AccountId,
            AssetIdOf<T>,
            AssetIdOf<T>,
            AssetBalanceOf<T>,
            AssetBalanceOf<T>,
            AssetBalanceOf<T>,
        ),
        /// Liquidity was removed from a pool
        /// [provider, recipient, asset_a, asset_b, amount_a, amount_b, liquidity_burned]
        LiquidityRemoved(
            T::AccountId,
            T::AccountId,
            AssetIdOf<T>,
            AssetIdOf<T>,
            AssetBalanceOf<T>,
            AssetBalanceOf<T>,
            AssetBalanceOf<T>,
        ),
        /// An asset was traded for another asset
        /// [buyer, recipient, asset_in, asset_out, amount_in, amount_out]
        AssetsSwapped(
            T::AccountId,
            T::AccountId,
            AssetIdOf<T>,
            AssetIdOf<T>,
            AssetBalanceOf<T>,
            AssetBalanceOf<T>,
        ),
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Asset with the specified ID does not exist
        AssetNotFound,
        /// The two assets of a pair must be different
        IdenticalAssets,
        /// The derived liquidity token ID is already taken by another asset
        TokenIdTaken,
        /// No pool exists for the given asset pair
        PoolNotFound,
        /// The pool has no outstanding liquidity tokens
        NoLiquidity,
        /// One or both of the pool's reserves are empty
        NoReserves,
        /// The swap path must name exactly two assets
        InvalidPath,
        /// Zero value provided for `amount_a_desired` parameter
        DesiredAmountAIsZero,
        /// Zero value provided for `amount_b_desired` parameter
        DesiredAmountBIsZero,
        /// Zero value provided for `liquidity_amount` parameter
        LiquidityAmountIsZero,
        /// Zero value provided for trade amount parameter
        TradeAmountIsZero,
        /// Not enough tokens to add liquidity or perform trade
        NotEnoughTokens,
        /// Specified account doesn't own enough liquidity tokens in the pool
        ProviderLiquidityTooLow,
        /// Value provided for `amount_a_min` parameter is too high
        MinAmountATooHigh,
        /// Value provided for `amount_b_min` parameter is too high
        MinAmountBTooHigh,
        /// Value provided for `amount_out_min` parameter is too high
        MinAmountOutTooHigh,
        /// The deposit is too small to mint any liquidity tokens
        InsufficientLiquidityMinted,
        /// Overflow occurred
        Overflow,
        /// Deadline specified for the operation has passed
        DeadlinePassed,
    }

    /// Canonical, order-independent identifier of a two-asset pair.
    /// `asset_a` always holds the smaller of the two IDs.
    #[derive(
        Clone, Encode, Decode, Eq, PartialEq, Ord, PartialOrd, RuntimeDebug, MaxEncodedLen, TypeInfo,
    )]
    pub struct AssetPair<AssetId> {
        pub asset_a: AssetId,
        pub asset_b: AssetId,
    }

    /// Reserve record of a pair, indexed in the pair's canonical order.
    #[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, MaxEncodedLen, TypeInfo)]
    pub struct Pool<AssetId, AssetBalance> {
        pub pair: AssetPair<AssetId>,
        pub reserve_a: AssetBalance,
        pub reserve_b: AssetBalance,
        pub liquidity_token_id: AssetId,
    }

    impl<AssetId: PartialEq, AssetBalance: Copy> Pool<AssetId, AssetBalance> {
        /// The reserves viewed from the side of `asset_first`, which must be
        /// one of the pair's two assets.
        pub fn reserves_for(&self, asset_first: &AssetId) -> (AssetBalance, AssetBalance) {
            if *asset_first == self.pair.asset_a {
                (self.reserve_a, self.reserve_b)
            } else {
                (self.reserve_b, self.reserve_a)
            }
        }
    }

    // Type aliases for convenience
    pub type AssetPairOf<T> = AssetPair<AssetIdOf<T>>;
    pub type PoolOf<T> = Pool<AssetIdOf<T>, AssetBalanceOf<T>>;

    #[pallet::storage]
    #[pallet::getter(fn pools)]
    pub(super) type Pools<T: Config> =
        StorageMap<_, Twox64Concat, AssetPairOf<T>, PoolOf<T>, OptionQuery>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Add liquidity to the pool of the (`asset_a`, `asset_b`) pair, creating the
        /// pool and its liquidity token if this is the first deposit for the pair.
        /// The first deposit is accepted exactly as desired and mints
        /// `isqrt(amount_a * amount_b)` liquidity tokens; subsequent deposits are
        /// matched against the current reserve ratio, with the non-limiting side
        /// scaled down. Liquidity tokens are minted to `recipient`.
        /// Emit `PoolCreated` (first deposit for the pair only) and `LiquidityAdded`
        /// events on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `asset_a`, `asset_b` – IDs of the deposited assets. Must be distinct and exist.
        ///   * `amount_a_desired`, `amount_b_desired` – Upper bounds of the deposit. Must be greater than 0.
        ///   * `amount_a_min`, `amount_b_min` – Lower bounds of the deposit after ratio matching.
        ///   * `recipient` – Account credited with the minted liquidity tokens.
        ///   * `deadline` – Unix timestamp (in seconds) up to which the call stays valid.
        ///
        /// **Errors:**
        ///   * `DeadlinePassed` – Current time is past the specified `deadline`.
        ///   * `DesiredAmountAIsZero`/`DesiredAmountBIsZero` – A desired amount equals 0.
        ///   * `NotEnoughTokens` – The caller cannot cover a desired amount.
        ///   * `IdenticalAssets` – `asset_a` and `asset_b` are the same asset.
        ///   * `AssetNotFound` – One of the assets does not exist.
        ///   * `TokenIdTaken` – The derived liquidity token ID is occupied by a foreign asset.
        ///   * `MinAmountATooHigh`/`MinAmountBTooHigh` – The ratio-matched deposit fell
        ///     below the corresponding minimum.
        ///   * `InsufficientLiquidityMinted` – The deposit is too small to mint any liquidity.
        #[pallet::call_index(0)]
        #[pallet::weight(<T as Config>::WeightInfo::add_liquidity())]
        #[transactional]
        pub fn add_liquidity(
            origin: OriginFor<T>,
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
            amount_a_desired: AssetBalanceOf<T>,
            amount_b_desired: AssetBalanceOf<T>,
            amount_a_min: AssetBalanceOf<T>,
            amount_b_min: AssetBalanceOf<T>,
            recipient: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::check_deadline(deadline)?;
            ensure!(amount_a_desired > Zero::zero(), Error::<T>::DesiredAmountAIsZero);
            ensure!(amount_b_desired > Zero::zero(), Error::<T>::DesiredAmountBIsZero);
            Self::check_enough_tokens(&asset_a, &caller, &amount_a_desired)?;
            Self::check_enough_tokens(&asset_b, &caller, &amount_b_desired)?;
            let pair = Self::pair_key(asset_a.clone(), asset_b.clone())?;
            let pool = Self::get_or_create_pool(&pair)?;

            // --------------------- Deposit & share computation --------------------
            let total_liquidity = T::AssetRegistry::total_issuance(pool.liquidity_token_id.clone());
            let (reserve_a, reserve_b) = pool.reserves_for(&asset_a);
            let (amount_a_actual, amount_b_actual, liquidity_minted) =
                if total_liquidity.is_zero() {
                    let liquidity_minted = amount_a_desired
                        .checked_mul(&amount_b_desired)
                        .ok_or(Error::<T>::Overflow)?
                        .integer_sqrt();
                    (amount_a_desired, amount_b_desired, liquidity_minted)
                } else {
                    let (amount_a_actual, amount_b_actual) = Self::match_to_reserve_ratio(
                        amount_a_desired,
                        amount_b_desired,
                        amount_a_min,
                        amount_b_min,
                        reserve_a,
                        reserve_b,
                    )?;
                    let minted_by_a = Self::mul_div(&amount_a_actual, &total_liquidity, &reserve_a)?;
                    let minted_by_b = Self::mul_div(&amount_b_actual, &total_liquidity, &reserve_b)?;
                    (amount_a_actual, amount_b_actual, minted_by_a.min(minted_by_b))
                };
            ensure!(liquidity_minted > Zero::zero(), Error::<T>::InsufficientLiquidityMinted);

            // ----------------------------- State update ---------------------------
            let (deposit_a, deposit_b) = if asset_a == pair.asset_a {
                (amount_a_actual, amount_b_actual)
            } else {
                (amount_b_actual, amount_a_actual)
            };
            Self::do_add_liquidity(pool, deposit_a, deposit_b, liquidity_minted, caller, recipient)
        }

        /// Remove liquidity from the pool of the (`asset_a`, `asset_b`) pair. The
        /// caller specifies the amount of liquidity tokens to burn and minimum
        /// amounts of both assets to receive; payouts are the burned share of each
        /// reserve, rounded down in the pool's favor, and are transferred to
        /// `recipient`. Emit `LiquidityRemoved` event on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `asset_a`, `asset_b` – IDs of the withdrawn assets.
        ///   * `liquidity_amount` – The amount of liquidity tokens to be burned. Must be greater than 0.
        ///   * `amount_a_min`, `amount_b_min` – The minimum amounts to receive.
        ///   * `recipient` – Account credited with the withdrawn assets.
        ///   * `deadline` – Unix timestamp (in seconds) up to which the call stays valid.
        ///
        /// **Errors:**
        ///   * `DeadlinePassed` – Current time is past the specified `deadline`.
        ///   * `LiquidityAmountIsZero` – Specified `liquidity_amount` equals 0.
        ///   * `IdenticalAssets` – `asset_a` and `asset_b` are the same asset.
        ///   * `NoLiquidity` – No pool exists for the pair, or its liquidity token
        ///     supply is zero.
        ///   * `ProviderLiquidityTooLow` – Specified `liquidity_amount` is greater than
        ///     the liquidity token balance of the caller account.
        ///   * `MinAmountATooHigh`/`MinAmountBTooHigh` – A computed payout is lower than
        ///     the corresponding minimum.
        #[pallet::call_index(1)]
        #[pallet::weight(<T as Config>::WeightInfo::remove_liquidity())]
        pub fn remove_liquidity(
            origin: OriginFor<T>,
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
            liquidity_amount: AssetBalanceOf<T>,
            amount_a_min: AssetBalanceOf<T>,
            amount_b_min: AssetBalanceOf<T>,
            recipient: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            Self::check_deadline(deadline)?;
            ensure!(liquidity_amount > Zero::zero(), Error::<T>::LiquidityAmountIsZero);
            let pair = Self::pair_key(asset_a.clone(), asset_b.clone())?;
            let pool = <Pools<T>>::get(&pair).ok_or(Error::<T>::NoLiquidity)?;
            let total_liquidity = T::AssetRegistry::total_issuance(pool.liquidity_token_id.clone());
            ensure!(!total_liquidity.is_zero(), Error::<T>::NoLiquidity);
            Self::check_enough_liquidity_owned(&pool, &caller, &liquidity_amount)?;

            // --------------------- Withdrawn amounts computation -------------------
            let (reserve_a, reserve_b) = pool.reserves_for(&asset_a);
            let amount_a = Self::mul_div(&liquidity_amount, &reserve_a, &total_liquidity)?;
            let amount_b = Self::mul_div(&liquidity_amount, &reserve_b, &total_liquidity)?;
            ensure!(amount_a >= amount_a_min, Error::<T>::MinAmountATooHigh);
            ensure!(amount_b >= amount_b_min, Error::<T>::MinAmountBTooHigh);

            // ----------------------------- State update ---------------------------
            let (withdraw_a, withdraw_b) = if asset_a == pair.asset_a {
                (amount_a, amount_b)
            } else {
                (amount_b, amount_a)
            };
            Self::do_remove_liquidity(pool, withdraw_a, withdraw_b, liquidity_amount, caller, recipient)
        }

        /// Sell an exact amount of `path[0]` for `path[1]` at the constant-product
        /// price, net of the provider fee. The bought amount is transferred to
        /// `recipient`. Emit `AssetsSwapped` event on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `amount_in` – Exact amount of `path[0]` to sell. Must be greater than 0.
        ///   * `amount_out_min` – The minimum amount of `path[1]` to receive.
        ///   * `path` – The traded assets. Must name exactly two distinct assets.
        ///   * `recipient` – Account credited with the bought asset.
        ///   * `deadline` – Unix timestamp (in seconds) up to which the call stays valid.
        ///
        /// **Errors:**
        ///   * `InvalidPath` – `path` does not name exactly two assets. Checked before
        ///     everything else.
        ///   * `DeadlinePassed` – Current time is past the specified `deadline`.
        ///   * `TradeAmountIsZero` – Specified `amount_in` equals 0.
        ///   * `IdenticalAssets` – The two path entries are the same asset.
        ///   * `PoolNotFound` – No pool exists for the pair.
        ///   * `NoReserves` – The pool has an empty reserve on either side.
        ///   * `MinAmountOutTooHigh` – The amount bought for `amount_in` is lower than
        ///     the specified `amount_out_min`.
        ///   * `NotEnoughTokens` – The available balance of the sold asset is not enough
        ///     to perform the trade.
        ///   * `Overflow` – An overflow occurred during price computation.
        #[pallet::call_index(2)]
        #[pallet::weight(<T as Config>::WeightInfo::swap_exact_tokens_for_tokens())]
        pub fn swap_exact_tokens_for_tokens(
            origin: OriginFor<T>,
            amount_in: AssetBalanceOf<T>,
            amount_out_min: AssetBalanceOf<T>,
            path: Vec<AssetIdOf<T>>,
            recipient: AccountIdOf<T>,
            deadline: u64,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            let caller = ensure_signed(origin)?;
            ensure!(path.len() == 2, Error::<T>::InvalidPath);
            let asset_in = path[0].clone();
            let asset_out = path[1].clone();
            Self::check_deadline(deadline)?;
            ensure!(amount_in > Zero::zero(), Error::<T>::TradeAmountIsZero);
            let pair = Self::pair_key(asset_in.clone(), asset_out.clone())?;
            let pool = Self::get_pool(&pair)?;
            let (reserve_in, reserve_out) = pool.reserves_for(&asset_in);
            ensure!(!reserve_in.is_zero() && !reserve_out.is_zero(), Error::<T>::NoReserves);

            // --------------------------- Compute price ---------------------------
            let amount_out = Self::get_amount_out(&amount_in, &reserve_in, &reserve_out)?;
            ensure!(amount_out >= amount_out_min, Error::<T>::MinAmountOutTooHigh);
            Self::check_enough_tokens(&asset_in, &caller, &amount_in)?;

            // --------------------------- Perform trade ---------------------------
            Self::do_swap(pool, asset_in, asset_out, amount_in, amount_out, caller, recipient)
        }
    }

    impl<T: Config> Pallet<T> {
        /// Canonical, order-independent key of the (`asset_a`, `asset_b`) pair.
        /// Both argument orders yield the same key.
        pub fn pair_key(
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
        ) -> Result<AssetPairOf<T>, Error<T>> {
            ensure!(asset_a != asset_b, Error::<T>::IdenticalAssets);
            if asset_a < asset_b {
                Ok(AssetPair { asset_a, asset_b })
            } else {
                Ok(AssetPair { asset_a: asset_b, asset_b: asset_a })
            }
        }

        /// The liquidity token ID of the (`asset_a`, `asset_b`) pair. A pure
        /// derivation: both argument orders yield the same ID, and the pool
        /// does not have to exist.
        pub fn liquidity_token_id(
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
        ) -> Result<AssetIdOf<T>, Error<T>> {
            let pair = Self::pair_key(asset_a, asset_b)?;
            Ok(T::PairToLiquidityTokenId::convert((pair.asset_a, pair.asset_b)))
        }

        pub(crate) fn get_pool(pair: &AssetPairOf<T>) -> Result<PoolOf<T>, Error<T>> {
            <Pools<T>>::get(pair).ok_or(Error::<T>::PoolNotFound)
        }

        /// Return the existing pool of the pair, or allocate a zero-reserve pool
        /// plus its liquidity token if none exists yet.
        fn get_or_create_pool(pair: &AssetPairOf<T>) -> Result<PoolOf<T>, Error<T>> {
            if let Some(pool) = <Pools<T>>::get(pair) {
                return Ok(pool);
            }
            ensure!(T::Assets::asset_exists(pair.asset_a.clone()), Error::<T>::AssetNotFound);
            ensure!(T::Assets::asset_exists(pair.asset_b.clone()), Error::<T>::AssetNotFound);

            let liquidity_token_id =
                T::PairToLiquidityTokenId::convert((pair.asset_a.clone(), pair.asset_b.clone()));
            T::AssetRegistry::create(
                liquidity_token_id.clone(),
                T::pallet_account(),
                false,
                One::one(),
            )
            .map_err(|_| Error::<T>::TokenIdTaken)?;

            let pool = Pool {
                pair: pair.clone(),
                reserve_a: Zero::zero(),
                reserve_b: Zero::zero(),
                liquidity_token_id: liquidity_token_id.clone(),
            };
            <Pools<T>>::insert(pair.clone(), pool.clone());
            Self::deposit_event(Event::PoolCreated(
                pair.asset_a.clone(),
                pair.asset_b.clone(),
                liquidity_token_id,
            ));
            Ok(pool)
        }

        fn check_deadline(deadline: u64) -> Result<(), Error<T>> {
            ensure!(T::TimeProvider::now().as_secs() <= deadline, Error::<T>::DeadlinePassed);
            Ok(())
        }

        fn check_enough_tokens(
            asset_id: &AssetIdOf<T>,
            account_id: &AccountIdOf<T>,
            amount: &AssetBalanceOf<T>,
        ) -> Result<(), Error<T>> {
            match T::Assets::can_withdraw(asset_id.clone(), account_id, *amount) {
                WithdrawConsequence::Success => Ok(()),
                WithdrawConsequence::ReducedToZero(_) => Ok(()),
                WithdrawConsequence::UnknownAsset => Err(Error::<T>::AssetNotFound),
                _ => Err(Error::<T>::NotEnoughTokens),
            }
        }

        fn check_enough_liquidity_owned(
            pool: &PoolOf<T>,
            account_id: &AccountIdOf<T>,
            amount: &AssetBalanceOf<T>,
        ) -> Result<(), Error<T>> {
            let asset_id = pool.liquidity_token_id.clone();
            match T::AssetRegistry::can_withdraw(asset_id, account_id, *amount) {
                WithdrawConsequence::Success => Ok(()),
                WithdrawConsequence::ReducedToZero(_) => Ok(()),
                WithdrawConsequence::UnknownAsset => Err(Error::<T>::AssetNotFound),
                _ => Err(Error::<T>::ProviderLiquidityTooLow),
            }
        }

        /// Match a desired deposit against the current reserve ratio: the side
        /// that would overfill the ratio is scaled down, then the caller's
        /// minimums are enforced on the result.
        fn match_to_reserve_ratio(
            amount_a_desired: AssetBalanceOf<T>,
            amount_b_desired: AssetBalanceOf<T>,
            amount_a_min: AssetBalanceOf<T>,
            amount_b_min: AssetBalanceOf<T>,
            reserve_a: AssetBalanceOf<T>,
            reserve_b: AssetBalanceOf<T>,
        ) -> Result<(AssetBalanceOf<T>, AssetBalanceOf<T>), Error<T>> {
            let amount_b_optimal = Self::mul_div(&amount_a_desired, &reserve_b, &reserve_a)?;
            if amount_b_optimal <= amount_b_desired {
                ensure!(amount_b_optimal >= amount_b_min, Error::<T>::MinAmountBTooHigh);
                Ok((amount_a_desired, amount_b_optimal))
            } else {
                let amount_a_optimal = Self::mul_div(&amount_b_desired, &reserve_a, &reserve_b)?;
                debug_assert!(amount_a_optimal <= amount_a_desired);
                ensure!(amount_a_optimal >= amount_a_min, Error::<T>::MinAmountATooHigh);
                Ok((amount_a_optimal, amount_b_desired))
            }
        }

        /// The amount of the output asset bought by a fixed `amount_in`, net of
        /// the provider fee. The division is floored, so the reserve product
        /// never decreases across a swap.
        pub(crate) fn get_amount_out(
            amount_in: &AssetBalanceOf<T>,
            reserve_in: &AssetBalanceOf<T>,
            reserve_out: &AssetBalanceOf<T>,
        ) -> Result<AssetBalanceOf<T>, Error<T>> {
            debug_assert!(!reserve_in.is_zero());
            debug_assert!(!reserve_out.is_zero());
            let amount_in_with_fee = amount_in
                .checked_mul(&T::net_amount_numerator())
                .ok_or(Error::Overflow)?;
            let numerator = amount_in_with_fee
                .checked_mul(reserve_out)
                .ok_or(Error::Overflow)?;
            let denominator = reserve_in
                .checked_mul(&T::ProviderFeeDenominator::get())
                .ok_or(Error::Overflow)?
                .checked_add(&amount_in_with_fee)
                .ok_or(Error::Overflow)?;
            Ok(numerator / denominator)
        }

        fn mul_div(
            a: &AssetBalanceOf<T>,
            b: &AssetBalanceOf<T>,
            c: &AssetBalanceOf<T>,
        ) -> Result<AssetBalanceOf<T>, Error<T>> {
            a.checked_mul(b)
                .ok_or(Error::<T>::Overflow)?
                .checked_div(c)
                .ok_or(Error::<T>::Overflow)
        }

        /// Pull both deposits from the provider, mint liquidity tokens,
        /// update pool reserves, emit event
        #[transactional]
        fn do_add_liquidity(
            mut pool: PoolOf<T>,
            amount_a: AssetBalanceOf<T>,
            amount_b: AssetBalanceOf<T>,
            liquidity_minted: AssetBalanceOf<T>,
            provider: AccountIdOf<T>,
            recipient: AccountIdOf<T>,
        ) -> DispatchResult {
            // --------------------------- Token transfer ---------------------------
            let pallet_account = T::pallet_account();
            T::Assets::transfer(
                pool.pair.asset_a.clone(),
                &provider,
                &pallet_account,
                amount_a,
                Preservation::Preserve,
            )?;
            T::Assets::transfer(
                pool.pair.asset_b.clone(),
                &provider,
                &pallet_account,
                amount_b,
                Preservation::Preserve,
            )?;
            T::AssetRegistry::mint_into(
                pool.liquidity_token_id.clone(),
                &recipient,
                liquidity_minted,
            )?;

            // -------------------------- Balances update --------------------------
            pool.reserve_a = pool.reserve_a.checked_add(&amount_a).ok_or(Error::<T>::Overflow)?;
            pool.reserve_b = pool.reserve_b.checked_add(&amount_b).ok_or(Error::<T>::Overflow)?;
            let pair = pool.pair.clone();
            <Pools<T>>::insert(pair.clone(), pool);

            // ---------------------------- Emit event -----------------------------
            Self::deposit_event(Event::LiquidityAdded(
                provider,
                recipient,
                pair.asset_a,
                pair.asset_b,
                amount_a,
                amount_b,
                liquidity_minted,
            ));
            Ok(())
        }

        /// Burn liquidity tokens, pay out the burned share of both reserves,
        /// update pool reserves, emit event
        #[transactional]
        fn do_remove_liquidity(
            mut pool: PoolOf<T>,
            amount_a: AssetBalanceOf<T>,
            amount_b: AssetBalanceOf<T>,
            liquidity_amount: AssetBalanceOf<T>,
            provider: AccountIdOf<T>,
            recipient: AccountIdOf<T>,
        ) -> DispatchResult {
            // --------------------------- Token transfer ---------------------------
            let pallet_account = T::pallet_account();
            T::AssetRegistry::burn_from(
                pool.liquidity_token_id.clone(),
                &provider,
                liquidity_amount,
                Precision::Exact,
                Fortitude::Polite,
            )?;
            T::Assets::transfer(
                pool.pair.asset_a.clone(),
                &pallet_account,
                &recipient,
                amount_a,
                Preservation::Expendable,
            )?;
            T::Assets::transfer(
                pool.pair.asset_b.clone(),
                &pallet_account,
                &recipient,
                amount_b,
                Preservation::Expendable,
            )?;

            // -------------------------- Balances update --------------------------
            pool.reserve_a = pool.reserve_a.checked_sub(&amount_a).ok_or(Error::<T>::Overflow)?;
            pool.reserve_b = pool.reserve_b.checked_sub(&amount_b).ok_or(Error::<T>::Overflow)?;
            let pair = pool.pair.clone();
            <Pools<T>>::insert(pair.clone(), pool);

            // ---------------------------- Emit event -----------------------------
            Self::deposit_event(Event::LiquidityRemoved(
                provider,
                recipient,
                pair.asset_a,
                pair.asset_b,
                amount_a,
                amount_b,
                liquidity_amount,
            ));
            Ok(())
        }

        /// Pull the sold asset into the pool, pay out the bought asset,
        /// update pool reserves, emit event
        #[transactional]
        fn do_swap(
            mut pool: PoolOf<T>,
            asset_in: AssetIdOf<T>,
            asset_out: AssetIdOf<T>,
            amount_in: AssetBalanceOf<T>,
            amount_out: AssetBalanceOf<T>,
            buyer: AccountIdOf<T>,
            recipient: AccountIdOf<T>,
        ) -> DispatchResult {
            // --------------------------- Token transfer ---------------------------
            let pallet_account = T::pallet_account();
            T::Assets::transfer(
                asset_in.clone(),
                &buyer,
                &pallet_account,
                amount_in,
                Preservation::Preserve,
            )?;
            T::Assets::transfer(
                asset_out.clone(),
                &pallet_account,
                &recipient,
                amount_out,
                Preservation::Expendable,
            )?;

            // -------------------------- Balances update --------------------------
            if asset_in == pool.pair.asset_a {
                pool.reserve_a = pool.reserve_a.checked_add(&amount_in).ok_or(Error::<T>::Overflow)?;
                pool.reserve_b = pool.reserve_b.checked_sub(&amount_out).ok_or(Error::<T>::Overflow)?;
            } else {
                pool.reserve_b = pool.reserve_b.checked_add(&amount_in).ok_or(Error::<T>::Overflow)?;
                pool.reserve_a = pool.reserve_a.checked_sub(&amount_out).ok_or(Error::<T>::Overflow)?;
            }
            let pair = pool.pair.clone();
            <Pools<T>>::insert(pair, pool);

            // ---------------------------- Emit event -----------------------------
            Self::deposit_event(Event::AssetsSwapped(
                buyer,
                recipient,
                asset_in,
                asset_out,
                amount_in,
                amount_out,
            ));
            Ok(())
        }
    }
}
