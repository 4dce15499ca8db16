//! Statically typed call descriptors for the contracts the interface talks to.
//!
//! Each `*Call` type generated here knows its own selector and ABI encoding, so
//! callers build clauses with `SolCall::abi_encode` and read results with
//! `SolCall::abi_decode_returns`.

pub mod factory {
    alloy_sol_types::sol! {
        #[derive(Debug, PartialEq, Eq)]
        interface IVexchangeV2Factory {
            function getPair(address tokenA, address tokenB) external view returns (address pair);
        }
    }
}

pub mod pair {
    alloy_sol_types::sol! {
        #[derive(Debug, PartialEq, Eq)]
        interface IVexchangeV2Pair {
            function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
        }
    }
}

pub mod erc20 {
    alloy_sol_types::sol! {
        #[derive(Debug, PartialEq, Eq)]
        interface IERC20 {
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 amount) external returns (bool);
            function transfer(address to, uint256 amount) external returns (bool);
        }
    }
}

pub mod router {
    alloy_sol_types::sol! {
        #[derive(Debug, PartialEq, Eq)]
        interface IVexchangeV2Router {
            function swapExactTokensForTokens(
                uint256 amountIn,
                uint256 amountOutMin,
                address[] calldata path,
                address to,
                uint256 deadline
            ) external returns (uint256[] memory amounts);
            function swapExactVETForTokens(
                uint256 amountOutMin,
                address[] calldata path,
                address to,
                uint256 deadline
            ) external payable returns (uint256[] memory amounts);
            function swapExactTokensForVET(
                uint256 amountIn,
                uint256 amountOutMin,
                address[] calldata path,
                address to,
                uint256 deadline
            ) external returns (uint256[] memory amounts);
            function addLiquidity(
                address tokenA,
                address tokenB,
                uint256 amountADesired,
                uint256 amountBDesired,
                uint256 amountAMin,
                uint256 amountBMin,
                address to,
                uint256 deadline
            ) external returns (uint256 amountA, uint256 amountB, uint256 liquidity);
            function addLiquidityVET(
                address token,
                uint256 amountTokenDesired,
                uint256 amountTokenMin,
                uint256 amountVETMin,
                address to,
                uint256 deadline
            ) external payable returns (uint256 amountToken, uint256 amountVET, uint256 liquidity);
        }
    }
}
