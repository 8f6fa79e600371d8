//! 線性規劃模型容器
//!
//! 與求解器無關的宣告式模型: 變數、約束與目標式係數,
//! 由建構器產出, 再交給求解器轉成 HiGHS 的欄/列形式。

/// 變數編號 (加入順序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(pub usize);

/// 變數定義
#[derive(Debug, Clone)]
pub struct VariableDef {
    /// 變數名稱 (除錯與輸出用)
    pub name: String,
    /// 下界
    pub lower: f64,
    /// 上界
    pub upper: f64,
    /// 目標式係數
    pub cost: f64,
    /// 是否要求整數
    pub integer: bool,
}

/// 約束界: ≤ / ≥ / =
#[derive(Debug, Clone, Copy)]
pub enum RowBound {
    /// 左式 ≤ 右值
    Le(f64),
    /// 左式 ≥ 右值
    Ge(f64),
    /// 左式 = 右值
    Eq(f64),
}

/// 約束定義
#[derive(Debug, Clone)]
pub struct ConstraintDef {
    /// 約束名稱
    pub name: String,
    /// 線性項: (變數, 係數)
    pub terms: Vec<(VarId, f64)>,
    /// 約束界
    pub bound: RowBound,
}

/// 最佳化方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// 最小化
    Minimize,
    /// 最大化
    Maximize,
}

/// 線性規劃模型
#[derive(Debug, Clone)]
pub struct LpModel {
    /// 最佳化方向
    pub sense: Sense,
    /// 變數 (依加入順序)
    pub variables: Vec<VariableDef>,
    /// 約束
    pub constraints: Vec<ConstraintDef>,
}

impl LpModel {
    /// 建立空模型
    pub fn new(sense: Sense) -> Self {
        Self {
            sense,
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// 加入連續變數
    pub fn add_variable(&mut self, name: String, lower: f64, upper: f64, cost: f64) -> VarId {
        self.add_variable_inner(name, lower, upper, cost, false)
    }

    /// 加入整數變數
    pub fn add_integer_variable(
        &mut self,
        name: String,
        lower: f64,
        upper: f64,
        cost: f64,
    ) -> VarId {
        self.add_variable_inner(name, lower, upper, cost, true)
    }

    fn add_variable_inner(
        &mut self,
        name: String,
        lower: f64,
        upper: f64,
        cost: f64,
        integer: bool,
    ) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(VariableDef {
            name,
            lower,
            upper,
            cost,
            integer,
        });
        id
    }

    /// 加入約束
    pub fn add_constraint(&mut self, name: String, terms: Vec<(VarId, f64)>, bound: RowBound) {
        self.constraints.push(ConstraintDef { name, terms, bound });
    }

    /// 變數個數
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// 約束個數
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// 是否含整數變數
    pub fn has_integer_variables(&self) -> bool {
        self.variables.iter().any(|v| v.integer)
    }
}
