use crate::{AssetBalanceOf, AssetIdOf, Config, Error, Pallet, SPOT_PRICE_SCALE};
use codec::{Decode, Encode};
use frame_support::sp_runtime::traits::Zero;
use scale_info::prelude::format;
use scale_info::TypeInfo;
use sp_std::fmt::Debug;
use sp_std::vec::Vec;

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub enum RpcError {
    PoolNotFound,
    NoReserves,
    IdenticalAssets,
    Overflow,
    Unexpected(Vec<u8>),
}

pub type RpcResult<T> = Result<T, RpcError>;

impl<T: Config> From<Error<T>> for RpcError {
    fn from(err: Error<T>) -> Self {
        match err {
            Error::PoolNotFound => Self::PoolNotFound,
            Error::NoReserves => Self::NoReserves,
            Error::IdenticalAssets => Self::IdenticalAssets,
            Error::Overflow => Self::Overflow,
            err => Self::Unexpected(format!("{err:?}").into_bytes()),
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Get the instantaneous reserve ratio of the (`asset_in`, `asset_out`) pool,
    /// i.e. 'How much of the output asset is one unit of the input asset worth
    /// right now?', scaled by [`SPOT_PRICE_SCALE`]. This is a pure read of the
    /// reserves, not a trade simulation.
    pub fn spot_price(asset_in: AssetIdOf<T>, asset_out: AssetIdOf<T>) -> RpcResult<u128> {
        let pair = Self::pair_key(asset_in.clone(), asset_out)?;
        let pool = Self::get_pool(&pair)?;
        let (reserve_in, reserve_out) = pool.reserves_for(&asset_in);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(RpcError::NoReserves);
        }
        let scaled = Into::<u128>::into(reserve_out)
            .checked_mul(SPOT_PRICE_SCALE)
            .ok_or(RpcError::Overflow)?;
        Ok(scaled / Into::<u128>::into(reserve_in))
    }

    /// Get the output amount for a fixed-input trade,
    /// i.e. 'How much of `asset_out` would I get if I sold this much `asset_in`'?
    pub fn get_swap_output_amount(
        asset_in: AssetIdOf<T>,
        asset_out: AssetIdOf<T>,
        amount_in: AssetBalanceOf<T>,
    ) -> RpcResult<AssetBalanceOf<T>> {
        let pair = Self::pair_key(asset_in.clone(), asset_out)?;
        let pool = Self::get_pool(&pair)?;
        let (reserve_in, reserve_out) = pool.reserves_for(&asset_in);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(RpcError::NoReserves);
        }
        Ok(Self::get_amount_out(&amount_in, &reserve_in, &reserve_out)?)
    }

    /// Get the liquidity token ID derived for the (`asset_a`, `asset_b`) pair.
    /// Works for both argument orders and does not require the pool to exist.
    pub fn get_liquidity_token_id(
        asset_a: AssetIdOf<T>,
        asset_b: AssetIdOf<T>,
    ) -> RpcResult<AssetIdOf<T>> {
        Ok(Self::liquidity_token_id(asset_a, asset_b)?)
    }
}
