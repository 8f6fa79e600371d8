//! HiGHS 求解器介面

use crate::model::{LpModel, RowBound, Sense as ModelSense};
use highs::{Col, HighsModelStatus, RowProblem, Sense};
use wcp_core::Result;

/// 求解狀態
///
/// 時間到達上限時回傳當前最佳解, 與最佳解狀態明確區分;
/// 呼叫端不得把逾時解當成最佳解報告。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SolveStatus {
    /// 求得最佳解
    Optimal,
    /// 到達時間上限, 回傳當前可行解
    TimeLimit,
    /// 模型不可行
    Infeasible,
    /// 求解器失敗 (無界、數值錯誤等)
    Failed(String),
}

impl SolveStatus {
    /// 解向量是否可用
    pub fn has_solution(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::TimeLimit)
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Optimal => f.write_str("optimal"),
            SolveStatus::TimeLimit => f.write_str("time_limit"),
            SolveStatus::Infeasible => f.write_str("infeasible"),
            SolveStatus::Failed(msg) => write!(f, "failed: {}", msg),
        }
    }
}

/// 原始解: 狀態 + 目標值 + 依變數順序的解向量
#[derive(Debug, Clone)]
pub struct RawSolution {
    /// 求解狀態
    pub status: SolveStatus,
    /// 目標值 (無解時為 NaN)
    pub objective: f64,
    /// 解向量 (依 [`crate::model::VarId`] 順序)
    pub values: Vec<f64>,
}

/// HiGHS 求解器
#[derive(Debug, Clone, Default)]
pub struct HighsSolver {
    /// 求解時間上限 (秒)
    pub time_limit_secs: Option<f64>,
}

impl HighsSolver {
    /// 建立無時間上限的求解器
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定時間上限
    pub fn with_time_limit(mut self, secs: f64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// 求解模型
    pub fn solve(&self, model: &LpModel) -> Result<RawSolution> {
        let n_vars = model.num_variables();
        let mut pb = RowProblem::new();

        let mut cols: Vec<Col> = Vec::with_capacity(n_vars);
        for var in &model.variables {
            let col =
                pb.add_column_with_integrality(var.cost, var.lower..=var.upper, var.integer);
            cols.push(col);
        }

        for constraint in &model.constraints {
            let terms: Vec<(Col, f64)> = constraint
                .terms
                .iter()
                .filter(|(_, coef)| coef.abs() > 1e-10)
                .map(|(var, coef)| (cols[var.0], *coef))
                .collect();
            match constraint.bound {
                RowBound::Le(rhs) => {
                    pb.add_row(..=rhs, terms);
                }
                RowBound::Ge(rhs) => {
                    pb.add_row(rhs.., terms);
                }
                RowBound::Eq(rhs) => {
                    pb.add_row(rhs..=rhs, terms);
                }
            }
        }

        let sense = match model.sense {
            ModelSense::Minimize => Sense::Minimise,
            ModelSense::Maximize => Sense::Maximise,
        };
        let mut highs_model = pb.optimise(sense);
        if let Some(secs) = self.time_limit_secs {
            highs_model.set_option("time_limit", secs);
        }

        tracing::info!(
            variables = n_vars,
            constraints = model.num_constraints(),
            time_limit = ?self.time_limit_secs,
            "開始求解"
        );
        let solved = highs_model.solve();
        let status = solved.status();

        match status {
            HighsModelStatus::Optimal | HighsModelStatus::ModelEmpty => {
                let sol = solved.get_solution();
                let values: Vec<f64> = cols.iter().map(|&c| sol[c]).collect();
                tracing::info!(objective = solved.objective_value(), "求得最佳解");
                Ok(RawSolution {
                    status: SolveStatus::Optimal,
                    objective: solved.objective_value(),
                    values,
                })
            }
            HighsModelStatus::ReachedTimeLimit => {
                // 時間到時可能還沒有任何可行解
                let sol = solved.get_solution();
                let columns = sol.columns();
                let values: Vec<f64> = if columns.len() == n_vars {
                    columns.to_vec()
                } else {
                    vec![0.0; n_vars]
                };
                tracing::warn!(
                    objective = solved.objective_value(),
                    "到達時間上限, 回傳當前可行解"
                );
                Ok(RawSolution {
                    status: SolveStatus::TimeLimit,
                    objective: solved.objective_value(),
                    values,
                })
            }
            HighsModelStatus::Infeasible => {
                tracing::warn!("模型不可行");
                Ok(RawSolution {
                    status: SolveStatus::Infeasible,
                    objective: f64::NAN,
                    values: vec![0.0; n_vars],
                })
            }
            other => {
                tracing::error!(status = ?other, "求解器回報異常狀態");
                Ok(RawSolution {
                    status: SolveStatus::Failed(format!("{:?}", other)),
                    objective: f64::NAN,
                    values: vec![0.0; n_vars],
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LpModel, RowBound, Sense};

    #[test]
    fn test_solve_tiny_lp() {
        // min x + 2y s.t. x + y >= 4, x <= 3
        let mut model = LpModel::new(Sense::Minimize);
        let x = model.add_variable("x".to_string(), 0.0, 3.0, 1.0);
        let y = model.add_variable("y".to_string(), 0.0, f64::INFINITY, 2.0);
        model.add_constraint("c1".to_string(), vec![(x, 1.0), (y, 1.0)], RowBound::Ge(4.0));

        let solution = HighsSolver::new().solve(&model).unwrap();
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert!((solution.values[x.0] - 3.0).abs() < 1e-6);
        assert!((solution.values[y.0] - 1.0).abs() < 1e-6);
        assert!((solution.objective - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_infeasible_model_reported() {
        // x >= 5 與 x <= 3 同時成立不可行
        let mut model = LpModel::new(Sense::Minimize);
        let x = model.add_variable("x".to_string(), 0.0, 3.0, 1.0);
        model.add_constraint("c1".to_string(), vec![(x, 1.0)], RowBound::Ge(5.0));

        let solution = HighsSolver::new().solve(&model).unwrap();
        assert_eq!(solution.status, SolveStatus::Infeasible);
        assert!(!solution.status.has_solution());
    }

    #[test]
    fn test_integer_variable_respected() {
        // max y s.t. y <= 2.5, y 整數 → y = 2
        let mut model = LpModel::new(Sense::Maximize);
        let y = model.add_integer_variable("y".to_string(), 0.0, 10.0, 1.0);
        model.add_constraint("c1".to_string(), vec![(y, 1.0)], RowBound::Le(2.5));

        let solution = HighsSolver::new().solve(&model).unwrap();
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert!((solution.values[y.0] - 2.0).abs() < 1e-6);
    }
}
