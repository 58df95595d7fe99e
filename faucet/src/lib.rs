//! # Faucet pallet
//!
//! A dispenser of test tokens for development networks. The faucet's sovereign
//! account holds balances of two configured assets and pays out a fixed amount
//! of each on request, at most once per cooldown period per recipient. Anyone
//! can top the faucet up from their own funds.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
mod mock;
pub mod weights;

pub use pallet::*;
pub use weights::WeightInfo;

type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
type AssetIdOf<T> = <T as Config>::AssetId;
type AssetBalanceOf<T> = <T as Config>::AssetBalance;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use codec::EncodeLike;
    use frame_support::{
        pallet_prelude::*,
        sp_runtime::traits::AccountIdConversion,
        traits::{
            fungibles::{Inspect, Mutate},
            tokens::{Balance, Fortitude, Preservation},
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
        /// Pallet ID. The pallet's sovereign account holds the dispensed funds.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// The overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The balance type for assets (i.e. tokens).
        type AssetBalance: Balance + MaxEncodedLen + MaybeSerializeDeserialize + TypeInfo;

        /// The asset ID type.
        type AssetId: MaybeSerializeDeserialize
            + MaxEncodedLen
            + TypeInfo
            + Clone
            + Debug
            + PartialEq
            + EncodeLike
            + Decode;

        /// The type for dispensed assets.
        type Assets: Inspect<Self::AccountId, AssetId = Self::AssetId, Balance = Self::AssetBalance>
            + Mutate<Self::AccountId>;

        /// Source of the current Unix timestamp, used to evaluate cooldowns.
        type TimeProvider: UnixTime;

        /// Origin allowed to choose the dispensed assets.
        type ManagerOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Amount of each asset paid out per request.
        #[pallet::constant]
        type RequestAmount: Get<Self::AssetBalance>;

        /// Minimum number of seconds between two requests for the same recipient.
        #[pallet::constant]
        type CooldownSeconds: Get<u64>;

        /// Information on runtime weights.
        type WeightInfo: WeightInfo;
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// The dispensed asset pair was configured [asset_a, asset_b]
        AssetsConfigured(AssetIdOf<T>, AssetIdOf<T>),
        /// Tokens were paid out [recipient, amount_of_each_asset]
        TokensDispensed(T::AccountId, AssetBalanceOf<T>),
        /// The faucet was topped up [from, amount_a, amount_b]
        Replenished(T::AccountId, AssetBalanceOf<T>, AssetBalanceOf<T>),
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The dispensed assets have not been configured yet
        AssetsNotConfigured,
        /// The two dispensed assets must be different
        IdenticalAssets,
        /// Asset with the specified ID does not exist
        AssetNotFound,
        /// The cooldown period of the recipient has not elapsed yet
        CooldownActive,
        /// The faucet does not hold enough of the first asset
        InsufficientAssetA,
        /// The faucet does not hold enough of the second asset
        InsufficientAssetB,
    }

    #[pallet::storage]
    #[pallet::getter(fn dispensed_assets)]
    pub(super) type DispensedAssets<T: Config> =
        StorageValue<_, (AssetIdOf<T>, AssetIdOf<T>), OptionQuery>;

    /// Unix timestamp (in seconds) of the last successful request per recipient.
    #[pallet::storage]
    #[pallet::getter(fn last_request_time)]
    pub(super) type LastRequestTime<T: Config> =
        StorageMap<_, Twox64Concat, AccountIdOf<T>, u64, ValueQuery>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Choose the two assets dispensed by the faucet.
        ///
        /// **Errors:**
        ///   * `BadOrigin` – The caller is not the configured manager origin.
        ///   * `IdenticalAssets` – The same asset was passed twice.
        ///   * `AssetNotFound` – One of the assets does not exist.
        #[pallet::call_index(0)]
        #[pallet::weight(<T as Config>::WeightInfo::set_assets())]
        pub fn set_assets(
            origin: OriginFor<T>,
            asset_a: AssetIdOf<T>,
            asset_b: AssetIdOf<T>,
        ) -> DispatchResult {
            T::ManagerOrigin::ensure_origin(origin)?;
            ensure!(asset_a != asset_b, Error::<T>::IdenticalAssets);
            ensure!(T::Assets::asset_exists(asset_a.clone()), Error::<T>::AssetNotFound);
            ensure!(T::Assets::asset_exists(asset_b.clone()), Error::<T>::AssetNotFound);
            <DispensedAssets<T>>::put((asset_a.clone(), asset_b.clone()));
            Self::deposit_event(Event::AssetsConfigured(asset_a, asset_b));
            Ok(())
        }

        /// Pay out `RequestAmount` of both dispensed assets to `recipient`.
        /// A recipient can be served at most once per `CooldownSeconds`.
        ///
        /// **Errors:**
        ///   * `AssetsNotConfigured` – `set_assets` has not been called yet.
        ///   * `CooldownActive` – The recipient was served less than `CooldownSeconds` ago.
        ///   * `InsufficientAssetA`/`InsufficientAssetB` – The faucet cannot cover the payout.
        #[pallet::call_index(1)]
        #[pallet::weight(<T as Config>::WeightInfo::request_tokens())]
        #[transactional]
        pub fn request_tokens(origin: OriginFor<T>, recipient: AccountIdOf<T>) -> DispatchResult {
            ensure_signed(origin)?;
            let (asset_a, asset_b) =
                <DispensedAssets<T>>::get().ok_or(Error::<T>::AssetsNotConfigured)?;
            let now = T::TimeProvider::now().as_secs();
            let last = <LastRequestTime<T>>::get(&recipient);
            ensure!(
                now >= last.saturating_add(T::CooldownSeconds::get()),
                Error::<T>::CooldownActive
            );

            let amount = T::RequestAmount::get();
            let faucet_account = Self::faucet_account();
            ensure!(
                Self::reducible(asset_a.clone(), &faucet_account) >= amount,
                Error::<T>::InsufficientAssetA
            );
            ensure!(
                Self::reducible(asset_b.clone(), &faucet_account) >= amount,
                Error::<T>::InsufficientAssetB
            );

            T::Assets::transfer(asset_a, &faucet_account, &recipient, amount, Preservation::Expendable)?;
            T::Assets::transfer(asset_b, &faucet_account, &recipient, amount, Preservation::Expendable)?;
            <LastRequestTime<T>>::insert(&recipient, now);

            Self::deposit_event(Event::TokensDispensed(recipient, amount));
            Ok(())
        }

        /// Move `amount_a` and `amount_b` of the dispensed assets from the caller
        /// into the faucet.
        ///
        /// **Errors:**
        ///   * `AssetsNotConfigured` – `set_assets` has not been called yet.
        #[pallet::call_index(2)]
        #[pallet::weight(<T as Config>::WeightInfo::replenish())]
        #[transactional]
        pub fn replenish(
            origin: OriginFor<T>,
            amount_a: AssetBalanceOf<T>,
            amount_b: AssetBalanceOf<T>,
        ) -> DispatchResult {
            let from = ensure_signed(origin)?;
            let (asset_a, asset_b) =
                <DispensedAssets<T>>::get().ok_or(Error::<T>::AssetsNotConfigured)?;
            let faucet_account = Self::faucet_account();
            T::Assets::transfer(asset_a, &from, &faucet_account, amount_a, Preservation::Preserve)?;
            T::Assets::transfer(asset_b, &from, &faucet_account, amount_b, Preservation::Preserve)?;
            Self::deposit_event(Event::Replenished(from, amount_a, amount_b));
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// The faucet's sovereign account, holder of the dispensed funds.
        pub fn faucet_account() -> AccountIdOf<T> {
            T::PalletId::get().into_account_truncating()
        }

        /// Current faucet holdings of the two dispensed assets.
        pub fn faucet_balances() -> Option<(AssetBalanceOf<T>, AssetBalanceOf<T>)> {
            let (asset_a, asset_b) = <DispensedAssets<T>>::get()?;
            let faucet_account = Self::faucet_account();
            Some((
                T::Assets::balance(asset_a, &faucet_account),
                T::Assets::balance(asset_b, &faucet_account),
            ))
        }

        fn reducible(asset_id: AssetIdOf<T>, account_id: &AccountIdOf<T>) -> AssetBalanceOf<T> {
            T::Assets::reducible_balance(
                asset_id,
                account_id,
                Preservation::Expendable,
                Fortitude::Polite,
            )
        }
    }
}
