use {
    serde::Serialize,
    solana_cli_output::{QuietDisplay, VerboseDisplay},
    solana_program::{native_token::Sol, pubkey::Pubkey},
    spl_stake_pool::state::{Fee, StakePool},
    std::fmt::{Display, Formatter, Result},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CliStakePoolFee {
    pub denominator: u64,
    pub numerator: u64,
}

impl Display for CliStakePoolFee {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl QuietDisplay for CliStakePoolFee {}
impl VerboseDisplay for CliStakePoolFee {}

impl From<Fee> for CliStakePoolFee {
    fn from(f: Fee) -> Self {
        Self {
            denominator: f.denominator,
            numerator: f.numerator,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CliStakePool {
    pub address: String,
    pub manager: String,
    pub staker: String,
    pub validator_list: String,
    pub validator_count: usize,
    pub reserve_stake: String,
    pub pool_mint: String,
    pub manager_fee_account: String,
    pub token_metadata: Option<String>,
    pub total_lamports: u64,
    pub pool_token_supply: u64,
    pub last_update_epoch: u64,
    pub epoch_fee: CliStakePoolFee,
    pub stake_deposit_fee: CliStakePoolFee,
    pub stake_withdrawal_fee: CliStakePoolFee,
    pub stake_referral_fee: u8,
    pub sol_deposit_fee: CliStakePoolFee,
    pub sol_withdrawal_fee: CliStakePoolFee,
    pub sol_referral_fee: u8,
}

impl CliStakePool {
    pub(crate) fn new(
        address: &Pubkey,
        stake_pool: StakePool,
        validator_count: usize,
        token_metadata: Option<Pubkey>,
    ) -> Self {
        Self {
            address: address.to_string(),
            manager: stake_pool.manager.to_string(),
            staker: stake_pool.staker.to_string(),
            validator_list: stake_pool.validator_list.to_string(),
            validator_count,
            reserve_stake: stake_pool.reserve_stake.to_string(),
            pool_mint: stake_pool.pool_mint.to_string(),
            manager_fee_account: stake_pool.manager_fee_account.to_string(),
            token_metadata: token_metadata.map(|address| address.to_string()),
            total_lamports: stake_pool.total_lamports,
            pool_token_supply: stake_pool.pool_token_supply,
            last_update_epoch: stake_pool.last_update_epoch,
            epoch_fee: stake_pool.epoch_fee.into(),
            stake_deposit_fee: stake_pool.stake_deposit_fee.into(),
            stake_withdrawal_fee: stake_pool.stake_withdrawal_fee.into(),
            stake_referral_fee: stake_pool.stake_referral_fee,
            sol_deposit_fee: stake_pool.sol_deposit_fee.into(),
            sol_withdrawal_fee: stake_pool.sol_withdrawal_fee.into(),
            sol_referral_fee: stake_pool.sol_referral_fee,
        }
    }
}

impl Display for CliStakePool {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Stake Pool: {}", &self.address)?;
        writeln!(f, "Manager: {}", &self.manager)?;
        writeln!(f, "Staker: {}", &self.staker)?;
        writeln!(
            f,
            "Validator List: {} ({} validators)",
            &self.validator_list, self.validator_count
        )?;
        writeln!(f, "Reserve Stake: {}", &self.reserve_stake)?;
        writeln!(f, "Pool Token Mint: {}", &self.pool_mint)?;
        writeln!(f, "Manager Fee Account: {}", &self.manager_fee_account)?;
        match &self.token_metadata {
            Some(address) => writeln!(f, "Token Metadata: {}", address)?,
            None => writeln!(f, "Token Metadata: none")?,
        }
        writeln!(f, "Total Stake: {}", Sol(self.total_lamports))?;
        writeln!(f, "Pool Token Supply: {}", self.pool_token_supply)?;
        writeln!(f, "Last Update Epoch: {}", self.last_update_epoch)?;
        writeln!(f, "Epoch Fee: {} of epoch rewards", &self.epoch_fee)?;
        writeln!(
            f,
            "Stake Deposit Fee: {} of staked amount, referral {}%",
            &self.stake_deposit_fee, self.stake_referral_fee
        )?;
        writeln!(
            f,
            "Stake Withdrawal Fee: {} of withdrawal amount",
            &self.stake_withdrawal_fee
        )?;
        writeln!(
            f,
            "SOL Deposit Fee: {} of deposit amount, referral {}%",
            &self.sol_deposit_fee, self.sol_referral_fee
        )?;
        write!(
            f,
            "SOL Withdrawal Fee: {} of withdrawal amount",
            &self.sol_withdrawal_fee
        )
    }
}

impl QuietDisplay for CliStakePool {}
impl VerboseDisplay for CliStakePool {}

#[cfg(test)]
mod tests {
    use {super::*, solana_cli_output::OutputFormat};

    #[test]
    fn fee_displays_as_fraction() {
        let fee: CliStakePoolFee = Fee {
            numerator: 1,
            denominator: 1000,
        }
        .into();
        assert_eq!(fee.to_string(), "1/1000");
    }

    #[test]
    fn json_uses_camel_case() {
        let fee: CliStakePoolFee = Fee {
            numerator: 3,
            denominator: 100,
        }
        .into();
        assert_eq!(
            OutputFormat::JsonCompact.formatted_string(&fee),
            r#"{"denominator":100,"numerator":3}"#
        );
        assert_eq!(OutputFormat::Display.formatted_string(&fee), "3/100");
    }
}
